//! # Commands Module
//!
//! The operations a UI invokes in response to user gestures. Each command
//! declares exactly the state containers it needs as parameters and returns
//! either a DTO or `Result<_, ApiError>`.
//!
//! - [`product`] - Shop-page listing and remaining-stock queries
//! - [`cart`] - Cart manipulation, coupon application, price summary
//! - [`admin`] - Product and coupon management

pub mod admin;
pub mod cart;
pub mod product;
