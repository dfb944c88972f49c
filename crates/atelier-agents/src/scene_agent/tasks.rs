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

use super::message::LifecycleMessage;
use atelier_core::asset::{AssetId, AssetSource};
use atelier_core::error::LoadError;
use atelier_core::loader::{LoadRequest, SceneLoader};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Spawns the timer that drives simulated progress for `asset`.
///
/// The first tick fires one `period` after the call. The task ends on its own
/// once the manager is gone; otherwise the manager aborts it.
pub(crate) fn spawn_progress_timer(
    asset: AssetId,
    period: Duration,
    sender: UnboundedSender<LifecycleMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticks = interval_at(Instant::now() + period, period);
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticks.tick().await;
            if sender.send(LifecycleMessage::Tick { asset }).is_err() {
                break;
            }
        }
    })
}

/// Spawns the task that reads the asset's bytes and hands them to `loader`.
///
/// Exactly one [`LifecycleMessage::Completed`] is sent, success or not. A
/// loader that panics is reported as [`LoadError::Interrupted`].
pub(crate) fn spawn_load(
    asset: AssetId,
    source: AssetSource,
    loader: Arc<dyn SceneLoader>,
    sender: UnboundedSender<LifecycleMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let load = tokio::spawn(async move {
            let bytes = source.bytes().read().await?;
            let request = LoadRequest {
                asset,
                filename: source.filename().to_string(),
                extension: source.extension().to_string(),
                bytes,
            };
            loader.load(&request).await
        });
        let result = load.await.unwrap_or_else(|err| {
            log::error!("Load task for asset {asset} ended abnormally: {err}");
            Err(LoadError::Interrupted)
        });
        // The manager may be gone already; nothing left to report to.
        let _ = sender.send(LifecycleMessage::Completed { asset, result });
    })
}
