// Code generated by wrapgen. DO NOT EDIT.

//! Accessor wrapper `MyStructWrapper` for `MyStruct` (module `crate`).

#![allow(non_snake_case)]

pub struct MyStructWrapper {
    w: Box<MyStruct>,
}

impl MyStructWrapper {
    pub fn PropA(&self) -> String {
        self.w.PropA.clone()
    }

    pub fn ValB(&self) -> i64 {
        self.w.valB.clone()
    }

    pub fn SomeC(&self) -> String {
        self.w.SomeC.clone()
    }

    pub fn HTTPServer(&self) -> String {
        self.w.http_server_url.clone()
    }
}
