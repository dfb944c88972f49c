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

//! The scene lifecycle: one asset at a time moves through
//! `Idle -> Loading -> Ready | Failed`, and a new asset restarts the cycle,
//! superseding whatever was still loading.

mod agent;
mod message;
mod showcase;
mod tasks;

pub use agent::SceneLifecycleManager;
pub use message::LoadPhase;
pub use showcase::showcase_objects;
