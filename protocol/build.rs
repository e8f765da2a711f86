//! Generates the `ConversionService` client and server stubs.
//!
//! Messages are declared by hand in `src/messages.rs`, so no `.proto` file
//! or `protoc` binary is needed.

use tonic_build::manual::{Builder, Method, Service};

fn main() {
    let service = Service::builder()
        .name("ConversionService")
        .package("fxgate.conversion")
        .method(
            Method::builder()
                .name("convert_currency")
                .route_name("ConvertCurrency")
                .input_type("crate::messages::ConversionRequest")
                .output_type("crate::messages::ConversionResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            Method::builder()
                .name("set_rate")
                .route_name("SetRate")
                .input_type("crate::messages::SetRateRequest")
                .output_type("crate::messages::SetRateResponse")
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    Builder::new().compile(&[service]);
    println!("cargo:rerun-if-changed=build.rs");
}
