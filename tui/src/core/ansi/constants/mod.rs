// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI constants, split by direction:
//! - [`input_sequences`]: bytes the terminal sends to us (keys).
//! - [`output_sequences`]: sequences we send to the terminal (screen control).
//! - [`sgr`]: colors and text attributes used by the renderer.

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

mod input_sequences;
mod output_sequences;
mod sgr;

pub use input_sequences::*;
pub use output_sequences::*;
pub use sgr::*;
