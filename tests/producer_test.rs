//! Producer timing tests under tokio's paused clock.
//!
//! `start_paused = true` gives a virtual clock that auto-advances only while
//! every task is idle, so tick deadlines fire in deterministic order and wall
//! time never leaks into the assertions.

use order_engine::lifecycle::DashboardSystem;
use order_engine::model::{ProducerConfigUpdate, ProducerStatus};
use order_engine::producer::OrderGenerator;
use std::time::Duration;
use tokio::time::sleep;

fn seeded_system() -> DashboardSystem {
    DashboardSystem::with_generator(OrderGenerator::with_seed(1234))
}

async fn configure(system: &DashboardSystem, interval_ms: u64, batch_size: usize) {
    system
        .engine
        .update_producer_config(ProducerConfigUpdate {
            interval_ms: Some(interval_ms),
            batch_size: Some(batch_size),
        })
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn four_ticks_in_two_seconds_generate_twenty_orders() {
    let system = seeded_system();
    configure(&system, 500, 5).await;

    let state = system.engine.start_producer().await.unwrap();
    assert_eq!(state.status, ProducerStatus::Active);
    assert_eq!(state.generation_rate, 10.0);

    // Ticks land at 500, 1000, 1500 and 2000ms.
    sleep(Duration::from_millis(2001)).await;

    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.generated_count, 20);
    assert!(state.last_generated_at.is_some());

    let orders = system.engine.orders().await.unwrap();
    assert_eq!(orders.len(), 20);
    assert_eq!(orders[0].id, "ORD-00001");
    assert_eq!(orders[19].id, "ORD-00020");

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn no_ticks_fire_before_the_first_interval_elapses() {
    let system = seeded_system();
    configure(&system, 500, 1).await;
    system.engine.start_producer().await.unwrap();

    sleep(Duration::from_millis(499)).await;
    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.generated_count, 0);
    assert!(state.last_generated_at.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn pause_freezes_the_count() {
    let system = seeded_system();
    configure(&system, 500, 1).await;
    system.engine.start_producer().await.unwrap();

    sleep(Duration::from_millis(1001)).await;
    let state = system.engine.pause_producer().await.unwrap();
    assert_eq!(state.status, ProducerStatus::Paused);
    assert_eq!(state.generated_count, 2);

    // Long after the pause: nothing further fired.
    sleep(Duration::from_millis(5000)).await;
    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.status, ProducerStatus::Paused);
    assert_eq!(state.generated_count, 2);
    assert_eq!(system.engine.orders().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn stopped_producer_never_ticks() {
    let system = seeded_system();
    configure(&system, 100, 3).await;

    // Never started: stays Stopped, count stays 0.
    sleep(Duration::from_millis(2000)).await;
    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.status, ProducerStatus::Stopped);
    assert_eq!(state.generated_count, 0);

    // Pause from Stopped is a no-op, not a transition.
    let state = system.engine.pause_producer().await.unwrap();
    assert_eq!(state.status, ProducerStatus::Stopped);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_pending_ticks() {
    let system = seeded_system();
    configure(&system, 500, 2).await;
    system.engine.start_producer().await.unwrap();

    sleep(Duration::from_millis(1001)).await;
    let state = system.engine.stop_producer().await.unwrap();
    assert_eq!(state.status, ProducerStatus::Stopped);
    let count_at_stop = state.generated_count;
    assert_eq!(count_at_stop, 4);

    sleep(Duration::from_millis(3000)).await;
    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.generated_count, count_at_stop);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn resume_restarts_from_a_fresh_interval() {
    let system = seeded_system();
    configure(&system, 500, 1).await;
    system.engine.start_producer().await.unwrap();

    // Pause before the first tick would have fired.
    sleep(Duration::from_millis(300)).await;
    system.engine.pause_producer().await.unwrap();
    sleep(Duration::from_millis(1000)).await;

    // Restart: the timer owes a full fresh 500ms, not the residual 200ms.
    system.engine.start_producer().await.unwrap();
    sleep(Duration::from_millis(400)).await;
    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.generated_count, 0);

    sleep(Duration::from_millis(150)).await;
    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.generated_count, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn reset_zeroes_counters_in_any_status() {
    let system = seeded_system();
    configure(&system, 500, 1).await;

    // Reset while stopped.
    let state = system.engine.reset_producer().await.unwrap();
    assert_eq!(state.status, ProducerStatus::Stopped);
    assert_eq!(state.generated_count, 0);

    system.engine.start_producer().await.unwrap();
    sleep(Duration::from_millis(1001)).await;
    assert_eq!(
        system.engine.producer_state().await.unwrap().generated_count,
        2
    );

    // Reset while active: counters zero, status and ticking continue.
    let state = system.engine.reset_producer().await.unwrap();
    assert_eq!(state.status, ProducerStatus::Active);
    assert_eq!(state.generated_count, 0);
    assert!(state.last_generated_at.is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn duplicates_after_reset_are_absorbed_and_not_counted() {
    let system = seeded_system();
    configure(&system, 500, 1).await;
    system.engine.start_producer().await.unwrap();

    // Two ticks: ORD-00001 and ORD-00002 land in the store.
    sleep(Duration::from_millis(1001)).await;
    system.engine.reset_producer().await.unwrap();

    // The restarted id sequence re-produces ORD-00001/00002, which the store
    // rejects as duplicates; only ORD-00003..5 are new.
    sleep(Duration::from_millis(2501)).await;

    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.generated_count, 3);
    assert_eq!(system.engine.orders().await.unwrap().len(), 5);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn config_change_takes_effect_on_the_next_cycle() {
    let system = seeded_system();
    configure(&system, 1000, 1).await;
    system.engine.start_producer().await.unwrap();

    sleep(Duration::from_millis(2100)).await;
    assert_eq!(
        system.engine.producer_state().await.unwrap().generated_count,
        2
    );

    // Re-arm at 200ms: next ticks at +200, every 200 after.
    configure(&system, 200, 1).await;
    sleep(Duration::from_millis(1050)).await;

    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.generated_count, 7);
    assert_eq!(state.config.interval_ms, 200);

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn invalid_config_is_rejected_and_previous_kept() {
    let system = seeded_system();
    configure(&system, 500, 2).await;
    system.engine.start_producer().await.unwrap();

    let err = system
        .engine
        .update_producer_config(ProducerConfigUpdate {
            interval_ms: Some(0),
            batch_size: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        order_engine::engine::EngineError::InvalidConfig(_)
    ));

    let err = system
        .engine
        .update_producer_config(ProducerConfigUpdate {
            interval_ms: None,
            batch_size: Some(0),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        order_engine::engine::EngineError::InvalidConfig(_)
    ));

    // Old config still drives the ticker.
    let state = system.engine.producer_state().await.unwrap();
    assert_eq!(state.config.interval_ms, 500);
    assert_eq!(state.config.batch_size, 2);

    sleep(Duration::from_millis(501)).await;
    assert_eq!(
        system.engine.producer_state().await.unwrap().generated_count,
        2
    );

    system.shutdown().await.unwrap();
}
