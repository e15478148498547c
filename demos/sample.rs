//! Worked example: making a config struct satisfy a getter-shaped trait.

#![allow(non_snake_case)]

/// Trait from a third-party crate we have to use and cannot change. It
/// would be friendlier as a plain struct, but another team shipped a very
/// abstract, decoupled API instead.
pub trait Sample {
    fn PropA(&self) -> String;
    fn ValB(&self) -> i64;
    fn SomeC(&self) -> String;
    fn HTTPServer(&self) -> String;
    fn Zzzz(&self) -> String;

    // ...many other similar getter-like methods...
}

/// Should implement `Sample`, but its fields must stay plain fields so
/// deserializers (config files, JSON) can see them.
pub struct MyStruct {
    pub PropA: String,
    // private for application reasons, but Sample still wants a getter
    #[cfg_attr(any(), wrapstruct("ValB"))]
    valB: i64,
    pub SomeC: String,
    // abbreviation-prefixed name cannot be mechanically capitalized
    #[cfg_attr(any(), wrapstruct("HTTPServer"))]
    pub http_server_url: String,
    // same name as a trait method, completely different meaning
    #[cfg_attr(any(), wrapstruct("-"))]
    pub Zzzz: Vec<u8>,

    // application-only field, irrelevant to Sample
    #[cfg_attr(any(), wrapstruct("-"))]
    pub PropD: String,
}

// Regenerate sample_wrapper.rs with:
//
//   wrapgen generate --src MyStruct --dst MyStructWrapper -o demos/sample_wrapper.rs

/// The generated wrapper covers everything except `Zzzz`; finish the trait
/// by hand on top of it.
pub struct SampleImpl {
    pub inner: MyStructWrapper,
}

impl Sample for SampleImpl {
    fn PropA(&self) -> String {
        self.inner.PropA()
    }
    fn ValB(&self) -> i64 {
        self.inner.ValB()
    }
    fn SomeC(&self) -> String {
        self.inner.SomeC()
    }
    fn HTTPServer(&self) -> String {
        self.inner.HTTPServer()
    }
    fn Zzzz(&self) -> String {
        "magic".to_string()
    }
}
