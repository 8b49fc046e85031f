//! Full bus-to-bus matcher flow.
//!
//! All tests run with a paused clock (`start_paused`), so tick timing
//! is deterministic and "wait five ticks" costs no wall time.

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use matcher_bus::{EventPublisher, MatcherEvent, Subscription, Topic, TopicSet};
    use matcher_node::{MatcherRuntime, NodeConfig};
    use tokio::time::timeout;

    /// Long enough for several 1 s ticks to fire under the paused clock.
    const FIVE_TICKS: Duration = Duration::from_secs(5);

    fn start_node() -> MatcherRuntime {
        let mut runtime = MatcherRuntime::new(NodeConfig::default());
        runtime.start().expect("runtime start");
        runtime
    }

    fn solution_subscriber(runtime: &MatcherRuntime) -> Subscription {
        runtime.bus().subscribe(TopicSet::only(Topic::Solution))
    }

    async fn expect_solution(sub: &mut Subscription) -> Vec<i8> {
        let event = timeout(FIVE_TICKS, sub.recv())
            .await
            .expect("expected a solution within five ticks")
            .expect("bus closed unexpectedly");
        match event {
            MatcherEvent::Solution(indices) => indices,
            other => panic!("expected a solution event, got {other:?}"),
        }
    }

    async fn expect_silence(sub: &mut Subscription) {
        let result = timeout(FIVE_TICKS, sub.recv()).await;
        assert!(result.is_err(), "expected no solution, got {result:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_output_before_target_arrives() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        bus.publish(MatcherEvent::InputArray(vec![2, 7, 11, 15])).await;
        bus.publish(MatcherEvent::InputArray(vec![1, 8, 11, 15])).await;

        expect_silence(&mut solutions).await;

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_output_before_array_arrives() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        bus.publish(MatcherEvent::Target(9)).await;
        bus.publish(MatcherEvent::Target(6)).await;

        expect_silence(&mut solutions).await;

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_pair_published() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        bus.publish(MatcherEvent::InputArray(vec![2, 7, 11, 15])).await;
        bus.publish(MatcherEvent::Target(9)).await;

        assert_eq!(expect_solution(&mut solutions).await, vec![0, 1]);

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_match_stays_silent() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        bus.publish(MatcherEvent::InputArray(vec![1, 2, 3])).await;
        bus.publish(MatcherEvent::Target(50)).await;

        expect_silence(&mut solutions).await;

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_tie_break_is_deterministic() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        bus.publish(MatcherEvent::InputArray(vec![3, 3, 4, 0])).await;
        bus.publish(MatcherEvent::Target(6)).await;

        assert_eq!(expect_solution(&mut solutions).await, vec![0, 1]);

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_stable_inputs_republish_every_tick() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        bus.publish(MatcherEvent::InputArray(vec![2, 7, 11, 15])).await;
        bus.publish(MatcherEvent::Target(9)).await;

        let first = expect_solution(&mut solutions).await;
        for _ in 0..3 {
            assert_eq!(expect_solution(&mut solutions).await, first);
        }

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_array_update_replaces_not_appends() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        bus.publish(MatcherEvent::InputArray(vec![2, 7, 11, 15])).await;
        bus.publish(MatcherEvent::Target(9)).await;
        assert_eq!(expect_solution(&mut solutions).await, vec![0, 1]);

        // The replacement contains no 2 or 7; its only matching pair for 9
        // is 4+5 at (2, 3). A stale element surviving the replacement would
        // surface as (0, 1) here.
        bus.publish(MatcherEvent::InputArray(vec![1, 1, 4, 5])).await;
        assert_eq!(expect_solution(&mut solutions).await, vec![2, 3]);

        // And a replacement with no matching pair goes silent.
        bus.publish(MatcherEvent::InputArray(vec![1, 2, 3])).await;
        expect_silence(&mut solutions).await;

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_and_singleton_arrays_never_match() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        bus.publish(MatcherEvent::InputArray(vec![])).await;
        bus.publish(MatcherEvent::Target(0)).await;
        expect_silence(&mut solutions).await;

        bus.publish(MatcherEvent::InputArray(vec![0])).await;
        expect_silence(&mut solutions).await;

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_sums_widen_instead_of_wrapping() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        // 100 + 100 = 200 at i16 width; -56 is its 8-bit wrap. Wrapping
        // arithmetic would publish (0, 1) here.
        bus.publish(MatcherEvent::InputArray(vec![100, 100])).await;
        bus.publish(MatcherEvent::Target(-56)).await;
        expect_silence(&mut solutions).await;

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_solution_channel_is_shared() {
        let runtime = start_node();
        let bus = runtime.bus();
        let mut solutions = solution_subscriber(&runtime);

        // A foreign publisher on /solution coexists with the matcher; its
        // message is delivered as-is and does not disturb matcher state.
        bus.publish(MatcherEvent::Solution(vec![9, 9])).await;
        let foreign = timeout(FIVE_TICKS, solutions.recv())
            .await
            .expect("foreign solution delivered")
            .expect("bus open");
        assert_eq!(foreign, MatcherEvent::Solution(vec![9, 9]));

        bus.publish(MatcherEvent::InputArray(vec![2, 7, 11, 15])).await;
        bus.publish(MatcherEvent::Target(9)).await;
        assert_eq!(expect_solution(&mut solutions).await, vec![0, 1]);

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_subscriber_catches_republication() {
        let runtime = start_node();
        let bus = runtime.bus();

        bus.publish(MatcherEvent::InputArray(vec![2, 7, 11, 15])).await;
        bus.publish(MatcherEvent::Target(9)).await;

        // Let a few ticks pass with nobody listening on /solution.
        tokio::time::sleep(Duration::from_secs(3)).await;

        // A late subscriber still sees the solution on the next tick.
        let mut late = solution_subscriber(&runtime);
        assert_eq!(expect_solution(&mut late).await, vec![0, 1]);

        runtime.shutdown().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_graceful_shutdown_stops_ticks() {
        let runtime = start_node();
        let bus = runtime.bus();

        bus.publish(MatcherEvent::InputArray(vec![2, 7])).await;
        bus.publish(MatcherEvent::Target(9)).await;

        let mut solutions = solution_subscriber(&runtime);
        let _ = expect_solution(&mut solutions).await;

        runtime.shutdown().await;

        // The matcher task is gone; no further solutions appear.
        let result = timeout(FIVE_TICKS, solutions.recv()).await;
        assert!(result.is_err(), "expected silence after shutdown");
    }
}
