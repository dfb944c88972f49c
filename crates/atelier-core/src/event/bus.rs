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

/// A fan-out event channel.
///
/// Each call to [`EventBus::subscribe`] opens a new unbounded `flume`
/// channel; [`EventBus::publish`] clones the event into every one of them.
/// Subscribers that dropped their receiver are pruned on the next publish,
/// and events published while nobody listens are simply dropped.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + 'static> {
    subscribers: Vec<flume::Sender<T>>,
}

impl<T: Clone + Send + 'static> EventBus<T> {
    /// Creates a bus with no subscribers.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Opens a new subscription. The receiver sees every event published
    /// from now on.
    pub fn subscribe(&mut self) -> flume::Receiver<T> {
        let (sender, receiver) = flume::unbounded();
        self.subscribers.push(sender);
        log::debug!("Event subscriber added ({} total).", self.subscribers.len());
        receiver
    }

    /// Delivers `event` to every live subscriber.
    pub fn publish(&mut self, event: T) {
        self.subscribers
            .retain(|subscriber| subscriber.send(event.clone()).is_ok());
    }

    /// Number of subscribers whose receiver is still alive.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .iter()
            .filter(|subscriber| !subscriber.is_disconnected())
            .count()
    }
}

impl<T: Clone + Send + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::TryRecvError;
    use std::{thread, time::Duration};

    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        Started { name: String },
        Progress(u8),
        Finished,
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let mut bus = EventBus::<TestEvent>::new();
        bus.publish(TestEvent::Finished);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn events_arrive_in_order() {
        let mut bus = EventBus::new();
        let receiver = bus.subscribe();

        bus.publish(TestEvent::Started {
            name: "chair.obj".into(),
        });
        bus.publish(TestEvent::Progress(10));
        bus.publish(TestEvent::Finished);

        let received: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            received,
            vec![
                TestEvent::Started {
                    name: "chair.obj".into()
                },
                TestEvent::Progress(10),
                TestEvent::Finished,
            ]
        );
        assert_eq!(receiver.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn every_subscriber_sees_every_event() {
        let mut bus = EventBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(TestEvent::Progress(40));

        assert_eq!(first.try_recv(), Ok(TestEvent::Progress(40)));
        assert_eq!(second.try_recv(), Ok(TestEvent::Progress(40)));
    }

    #[test]
    fn late_subscribers_miss_earlier_events() {
        let mut bus = EventBus::new();
        bus.publish(TestEvent::Progress(10));
        let receiver = bus.subscribe();
        bus.publish(TestEvent::Progress(20));
        assert_eq!(receiver.try_iter().collect::<Vec<_>>(), vec![TestEvent::Progress(20)]);
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut bus = EventBus::new();
        let kept = bus.subscribe();
        let dropped = bus.subscribe();
        drop(dropped);

        bus.publish(TestEvent::Finished);

        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.try_recv(), Ok(TestEvent::Finished));
    }

    #[test]
    fn dropped_subscribers_stop_counting_at_once() {
        let mut bus = EventBus::<TestEvent>::new();
        let receiver = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        drop(receiver);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn receiver_can_live_on_another_thread() {
        let mut bus = EventBus::new();
        let receiver = bus.subscribe();

        let handle = thread::spawn(move || receiver.recv_timeout(Duration::from_secs(1)));
        bus.publish(TestEvent::Progress(90));

        let received = handle.join().expect("Thread join failed");
        assert_eq!(received, Ok(TestEvent::Progress(90)));
    }
}
