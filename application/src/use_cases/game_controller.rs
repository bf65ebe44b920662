//! Game Controller
//!
//! Actor that owns the single authoritative [`GameSession`]. Player intents
//! arrive over an mpsc channel and the one-second countdown is a tokio
//! interval polled in the same `select!` loop, so a tick and an intent can
//! never interleave: whichever is processed first wins and the other sees
//! the updated status. Every applied transition publishes a fresh
//! [`SessionSnapshot`] on a `watch` channel for the presentation layer.
//!
//! Finished runs are handed to the [`MatchResultSink`] on a spawned task;
//! persistence failures are logged and never reach the player.

use crate::config::GameParams;
use crate::ports::match_sink::MatchResultSink;
use milhao_domain::{GameSession, GameStatus, LifelineKind, SessionSnapshot, Transition};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinSet;
use tokio::time::{Interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Capacity of the intent channel
const INTENT_BUFFER: usize = 32;

/// Countdown granularity
const TICK: Duration = Duration::from_secs(1);

/// Something the player asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameIntent {
    /// Answer with a 0-based option index
    Answer(usize),
    Stop,
    UseLifeline(LifelineKind),
    CloseLifelineModal,
    Restart,
    /// End the controller loop
    Quit,
}

/// Presentation-side handle: send intents, watch snapshots.
#[derive(Clone)]
pub struct GameHandle {
    intents: mpsc::Sender<GameIntent>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl GameHandle {
    /// Send an intent; returns `false` once the controller has shut down.
    pub async fn send(&self, intent: GameIntent) -> bool {
        self.intents.send(intent).await.is_ok()
    }

    /// A fresh receiver positioned at the latest snapshot
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }

    pub fn current(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }
}

pub struct GameController<K: MatchResultSink + ?Sized + 'static> {
    session: GameSession,
    sink: Arc<K>,
    params: GameParams,
    intents: mpsc::Receiver<GameIntent>,
    snapshots: watch::Sender<SessionSnapshot>,
    cancellation: CancellationToken,
    pending_writes: JoinSet<()>,
}

impl<K: MatchResultSink + ?Sized + 'static> GameController<K> {
    pub fn new(session: GameSession, sink: Arc<K>, params: GameParams) -> (Self, GameHandle) {
        let (intent_tx, intent_rx) = mpsc::channel(INTENT_BUFFER);
        let (snapshot_tx, snapshot_rx) = watch::channel(session.snapshot());

        let controller = Self {
            session,
            sink,
            params,
            intents: intent_rx,
            snapshots: snapshot_tx,
            cancellation: CancellationToken::new(),
            pending_writes: JoinSet::new(),
        };
        let handle = GameHandle {
            intents: intent_tx,
            snapshots: snapshot_rx,
        };
        (controller, handle)
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Run until `Quit`, cancellation, or every handle is dropped.
    ///
    /// Pending result writes are awaited before returning. Returns the last
    /// published snapshot.
    pub async fn run(mut self) -> SessionSnapshot {
        let mut ticker = tokio::time::interval(TICK);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick completes immediately; push it a full second out.
        ticker.reset();

        info!(
            time_limit = self.params.rules.time_limit_secs,
            reroll_uses = self.params.rules.reroll_uses,
            "Game started"
        );

        loop {
            let counting_down = self.session.status() == GameStatus::Playing
                && self.session.current_question().is_some();

            tokio::select! {
                biased;
                _ = self.cancellation.cancelled() => {
                    debug!("Game controller cancelled");
                    break;
                }
                intent = self.intents.recv() => {
                    let Some(intent) = intent else { break };
                    if intent == GameIntent::Quit {
                        break;
                    }
                    let transition = self.apply(intent);
                    self.publish(transition, &mut ticker);
                }
                _ = ticker.tick(), if counting_down => {
                    let transition = self.session.tick();
                    self.publish(transition, &mut ticker);
                }
                Some(joined) = self.pending_writes.join_next(), if !self.pending_writes.is_empty() => {
                    if let Err(e) = joined {
                        warn!("Match result task failed: {}", e);
                    }
                }
            }
        }

        while let Some(joined) = self.pending_writes.join_next().await {
            if let Err(e) = joined {
                warn!("Match result task failed: {}", e);
            }
        }

        info!(
            status = %self.session.status(),
            level = self.session.current_level(),
            prize = self.session.accumulated_money(),
            "Game controller stopped"
        );
        self.session.snapshot()
    }

    fn apply(&mut self, intent: GameIntent) -> Transition {
        debug!(?intent, "Applying intent");
        match intent {
            GameIntent::Answer(index) => self.session.answer(index),
            GameIntent::Stop => self.session.stop(),
            GameIntent::UseLifeline(kind) => self.session.use_lifeline(kind),
            GameIntent::CloseLifelineModal => self.session.close_lifeline_modal(),
            GameIntent::Restart => {
                let transition = self.session.restart();
                if transition.is_ignored() {
                    warn!("Restart ignored: no level-1 question available");
                }
                transition
            }
            GameIntent::Quit => Transition::Ignored,
        }
    }

    fn publish(&mut self, transition: Transition, ticker: &mut Interval) {
        if transition.is_ignored() {
            return;
        }
        if transition.question_changed() {
            ticker.reset();
            if self.session.is_stalled() {
                warn!(
                    level = self.session.current_level(),
                    used = self.session.used_question_ids().len(),
                    "Question pool exhausted; session stalled"
                );
            }
        }

        self.snapshots.send_replace(self.session.snapshot());

        if let Some(status) = transition.finished() {
            info!(
                status = %status,
                level = self.session.current_level(),
                prize = self.session.accumulated_money(),
                "Game finished"
            );
            self.persist();
        }
    }

    fn persist(&mut self) {
        let Some(user_id) = self.params.user_id.as_deref() else {
            debug!("No player configured; match result not recorded");
            return;
        };
        let Some(result) = self.session.match_result(user_id, &self.params.game_id) else {
            return;
        };

        let sink = Arc::clone(&self.sink);
        self.pending_writes.spawn(async move {
            match sink.record(&result).await {
                Ok(()) => debug!(sink = sink.name(), score = result.score, "Match result recorded"),
                Err(e) => warn!(sink = sink.name(), "Failed to record match result: {}", e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::match_sink::SinkError;
    use async_trait::async_trait;
    use milhao_domain::{
        GameRules, LifelineResult, LossReason, MatchResult, QuestionDraft,
        QuestionPool, builtin_questions,
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Mutex;

    struct RecordingSink {
        records: Mutex<Vec<MatchResult>>,
        fail: bool,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn count(&self) -> usize {
            self.records.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MatchResultSink for RecordingSink {
        fn name(&self) -> &str {
            "recording"
        }

        async fn record(&self, result: &MatchResult) -> Result<(), SinkError> {
            self.records.lock().unwrap().push(result.clone());
            if self.fail {
                return Err(SinkError::RequestFailed("offline".to_string()));
            }
            Ok(())
        }
    }

    fn pool() -> Arc<QuestionPool> {
        Arc::new(QuestionPool::from_questions(builtin_questions()))
    }

    fn params() -> GameParams {
        GameParams::default().with_user_id("player-1")
    }

    fn spawn_game(
        pool: Arc<QuestionPool>,
        sink: Arc<RecordingSink>,
        params: GameParams,
    ) -> (
        GameHandle,
        tokio::task::JoinHandle<SessionSnapshot>,
    ) {
        let session =
            GameSession::start(pool, params.rules, StdRng::seed_from_u64(11)).unwrap();
        let (controller, handle) = GameController::new(session, sink, params);
        (handle, tokio::spawn(controller.run()))
    }

    fn correct_option(pool: &QuestionPool, snapshot: &SessionSnapshot) -> usize {
        let id = &snapshot.question.as_ref().unwrap().id;
        pool.questions()
            .iter()
            .find(|q| q.id() == id)
            .unwrap()
            .correct_option()
    }

    async fn next_snapshot(rx: &mut watch::Receiver<SessionSnapshot>) -> SessionSnapshot {
        rx.changed().await.unwrap();
        rx.borrow_and_update().clone()
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_expiry_loses_with_timeout() {
        let sink = Arc::new(RecordingSink::new());
        let (handle, task) = spawn_game(pool(), Arc::clone(&sink), params());
        let mut rx = handle.subscribe();

        let snapshot = rx
            .wait_for(|s| s.status.is_terminal())
            .await
            .unwrap()
            .clone();
        assert_eq!(snapshot.status, GameStatus::Lost);
        assert_eq!(snapshot.loss_reason, Some(LossReason::Timeout));
        assert_eq!(snapshot.time_left, 0);
        assert_eq!(snapshot.accumulated_money, 0);

        assert!(handle.send(GameIntent::Quit).await);
        task.await.unwrap();
        assert_eq!(sink.count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_decrements_once_per_second() {
        let (handle, task) = spawn_game(pool(), Arc::new(RecordingSink::new()), params());
        let mut rx = handle.subscribe();

        let first = next_snapshot(&mut rx).await;
        assert_eq!(first.time_left, 29);
        let second = next_snapshot(&mut rx).await;
        assert_eq!(second.time_left, 28);
        assert!(second.is_tick_of(&first));

        handle.send(GameIntent::Quit).await;
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_correct_answer_resets_timer() {
        let pool = pool();
        let (handle, task) = spawn_game(Arc::clone(&pool), Arc::new(RecordingSink::new()), params());
        let mut rx = handle.subscribe();

        tokio::time::sleep(Duration::from_millis(20_500)).await;
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.time_left, 10);

        handle
            .send(GameIntent::Answer(correct_option(&pool, &snapshot)))
            .await;
        let advanced = rx.wait_for(|s| s.current_level == 2).await.unwrap().clone();
        assert_eq!(advanced.time_left, 30);
        assert_eq!(advanced.accumulated_money, 1_000);

        handle.send(GameIntent::Quit).await;
        let last = task.await.unwrap();
        assert_eq!(last.status, GameStatus::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_answer_records_exactly_once() {
        let pool = pool();
        let sink = Arc::new(RecordingSink::new());
        let (handle, task) = spawn_game(Arc::clone(&pool), Arc::clone(&sink), params());

        let snapshot = handle.current();
        let wrong = (correct_option(&pool, &snapshot) + 1) % 4;
        handle.send(GameIntent::Answer(wrong)).await;
        handle.send(GameIntent::Answer(wrong)).await;
        handle.send(GameIntent::Stop).await;
        tokio::time::sleep(Duration::from_secs(45)).await;

        handle.send(GameIntent::Quit).await;
        let last = task.await.unwrap();
        assert_eq!(last.status, GameStatus::Lost);
        assert_eq!(last.loss_reason, Some(LossReason::WrongAnswer));

        let records = sink.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_id, "player-1");
        assert_eq!(records[0].game_id, "show-do-milhao");
        assert_eq!(records[0].metadata.level, 1);
        assert_eq!(records[0].status, GameStatus::Lost);
    }

    #[tokio::test(start_paused = true)]
    async fn test_anonymous_play_is_not_recorded() {
        let sink = Arc::new(RecordingSink::new());
        let (handle, task) = spawn_game(pool(), Arc::clone(&sink), GameParams::default());

        handle.send(GameIntent::Stop).await;
        handle.send(GameIntent::Quit).await;
        let last = task.await.unwrap();
        assert_eq!(last.status, GameStatus::Stopped);
        assert_eq!(sink.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_failure_does_not_affect_outcome() {
        let sink = Arc::new(RecordingSink::failing());
        let (handle, task) = spawn_game(pool(), Arc::clone(&sink), params());

        handle.send(GameIntent::Stop).await;
        handle.send(GameIntent::Restart).await;
        handle.send(GameIntent::Quit).await;
        let last = task.await.unwrap();

        assert_eq!(sink.count(), 1);
        assert_eq!(last.status, GameStatus::Playing);
        assert_eq!(last.current_level, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_each_run_is_recorded_once() {
        let sink = Arc::new(RecordingSink::new());
        let (handle, task) = spawn_game(pool(), Arc::clone(&sink), params());

        handle.send(GameIntent::Stop).await;
        handle.send(GameIntent::Restart).await;
        handle.send(GameIntent::Stop).await;
        handle.send(GameIntent::Stop).await;
        handle.send(GameIntent::Quit).await;
        task.await.unwrap();

        assert_eq!(sink.count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_restart_after_timeout_restarts_countdown() {
        let rules = GameRules::default().with_time_limit(3);
        let params = params().with_rules(rules);
        let (handle, task) = spawn_game(pool(), Arc::new(RecordingSink::new()), params);
        let mut rx = handle.subscribe();

        rx.wait_for(|s| s.status == GameStatus::Lost).await.unwrap();
        handle.send(GameIntent::Restart).await;
        let restarted = rx
            .wait_for(|s| s.status == GameStatus::Playing)
            .await
            .unwrap()
            .clone();
        assert_eq!(restarted.time_left, 3);

        let ticked = next_snapshot(&mut rx).await;
        assert_eq!(ticked.time_left, 2);

        handle.send(GameIntent::Quit).await;
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_lifeline_and_modal_intents() {
        let (handle, task) = spawn_game(pool(), Arc::new(RecordingSink::new()), params());
        let mut rx = handle.subscribe();

        handle
            .send(GameIntent::UseLifeline(LifelineKind::CrowdVote))
            .await;
        let with_result = rx
            .wait_for(|s| s.lifeline_result.is_some())
            .await
            .unwrap()
            .clone();
        assert!(matches!(
            with_result.lifeline_result,
            Some(LifelineResult::CrowdVote { .. })
        ));

        handle.send(GameIntent::CloseLifelineModal).await;
        rx.wait_for(|s| s.lifeline_result.is_none()).await.unwrap();

        handle.send(GameIntent::Quit).await;
        let last = task.await.unwrap();
        let crowd = last.lifeline(LifelineKind::CrowdVote).unwrap();
        assert!(crowd.used);
        assert!(!crowd.available);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_session_does_not_tick() {
        let only_one = QuestionDraft::try_new(
            "Quem?",
            vec!["A".into(), "B".into(), "C".into(), "D".into()],
            1,
            milhao_domain::Difficulty::Easy,
            None,
        )
        .unwrap()
        .with_id(1u64);
        let pool = Arc::new(QuestionPool::from_questions(vec![only_one]));
        let (handle, task) = spawn_game(pool, Arc::new(RecordingSink::new()), params());
        let mut rx = handle.subscribe();

        handle.send(GameIntent::Answer(1)).await;
        let stalled = rx.wait_for(|s| s.stalled).await.unwrap().clone();
        tokio::time::sleep(Duration::from_secs(60)).await;

        let later = handle.current();
        assert_eq!(later.revision, stalled.revision);
        assert_eq!(later.status, GameStatus::Playing);

        handle.send(GameIntent::Quit).await;
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancellation_stops_controller() {
        let session =
            GameSession::start(pool(), GameRules::default(), StdRng::seed_from_u64(3)).unwrap();
        let token = CancellationToken::new();
        let (controller, _handle) =
            GameController::new(session, Arc::new(RecordingSink::new()), params());
        let task = tokio::spawn(controller.with_cancellation(token.clone()).run());

        token.cancel();
        let last = task.await.unwrap();
        assert_eq!(last.status, GameStatus::Playing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_controller() {
        let (handle, task) = spawn_game(pool(), Arc::new(RecordingSink::new()), params());
        drop(handle);
        let last = task.await.unwrap();
        assert_eq!(last.current_level, 1);
    }
}
