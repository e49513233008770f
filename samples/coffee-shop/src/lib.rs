//! # Coffee Shop Sample Application
//!
//! A sample coffee shop ordering application using richly.
//!
//! ## Overview
//!
//! This sample demonstrates modeling a small, closed domain with sum types
//! and exhaustive matches, and driving the presentation logic through the
//! rich container operations (`filter`, `map`, `flat_map`, `fold_left`).
//!
//! ## Module Structure
//!
//! - `menu`: The closed food and beverage hierarchies (`BakeryItem`,
//!   `CoffeeDrink`, `Tea`)
//! - `order`: Orders, receipts, and item descriptions

#![forbid(unsafe_code)]

pub mod menu;
pub mod order;
