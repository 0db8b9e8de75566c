/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Contains image manipulation algorithms
//!
//! Flip and mirror implement [`OperationsTrait`](crate::traits::OperationsTrait),
//! they read an image and return a new one.
pub mod flip;
pub mod mirror;
pub mod resize;
