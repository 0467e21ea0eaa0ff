#![no_std]
// static_cell::make_static! declares a TAIT for the RMT buffer
#![feature(type_alias_impl_trait)]

pub mod infrastructure;
