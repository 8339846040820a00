//! Generated protobuf messages and gRPC stubs for the `user` package.

tonic::include_proto!("user");
