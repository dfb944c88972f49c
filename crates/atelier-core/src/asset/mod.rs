// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides the input boundary of the studio: how an asset arrives and how it
//! is identified while it loads.
//!
//! The key components are:
//! - [`AssetSource`]: what the file-picker or drag-and-drop layer hands over,
//!   a filename, its extension and a [`ByteSource`].
//! - [`AssetId`]: the identity token minted for each load attempt. It travels
//!   through the whole asynchronous chain so late results can be matched
//!   against the asset that is current *now*.

mod id;
mod source;

pub use id::*;
pub use source::*;
