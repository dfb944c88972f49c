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

//! # Atelier Lanes
//!
//! The pure, synchronous logic of the studio: domain classification, tool
//! recommendation, and bounds/camera framing. Nothing here owns state or
//! performs I/O.

#![warn(missing_docs)]

pub mod classification_lane;
pub mod framing_lane;
pub mod recommendation_lane;

pub use classification_lane::DomainClassifier;
pub use framing_lane::FramingLane;
pub use recommendation_lane::{Recommendation, ToolRecommendationEngine};
