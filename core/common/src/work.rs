//! 作業ユニット（LogSink に開始・完了の 2 レコードを書き出す消費者）
//!
//! どの Sink 実装が刺さっているかをここでは知らない。構築時に 1 つ受け取り、
//! run のたびに固定の 2 レコード（開始・完了）を順に書く。Sink の差し替えで
//! 変わるのは出力先だけで、呼び出し列は変わらない。

use crate::error::Error;
use crate::ports::outbound::LogSink;
use std::sync::Arc;

/// 開始マーカー
pub const WORK_STARTED: &str = "Work Started!";

/// 完了マーカー
pub const WORK_DONE: &str = "WORK IS DONE, GOOD JOB.";

/// コンストラクタ注入の作業ユニット
///
/// Sink は生成時に 1 度だけ受け取り、以後差し替えない（setter なし）。
pub struct WorkUnit {
    sink: Arc<dyn LogSink>,
}

impl WorkUnit {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// 作業 1 件を実行し、開始・完了の 2 レコードで挟む。
    /// 開始レコードの書き込みに失敗したら完了レコードは書かずに中断する。
    pub fn run(&self) -> Result<(), Error> {
        self.sink.record(WORK_STARTED)?;
        // 実際の作業が入るのはここ
        self.sink.record(WORK_DONE)?;
        Ok(())
    }
}

/// 2 段階構築の作業ユニット（生成後に bind_sink で依存を注入する）
///
/// 未注入のまま run すると `Error::NotConfigured("sink")` を返す。注入後の
/// 振る舞いは `WorkUnit` と同一。再 bind は Sink の差し替えとして許容するが、
/// 通常の配線では `WorkUnit` のコンストラクタ注入を推奨する。
#[derive(Default)]
pub struct DeferredWorkUnit {
    sink: Option<Arc<dyn LogSink>>,
}

impl DeferredWorkUnit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink を注入する（2 段階目）。
    pub fn bind_sink(&mut self, sink: Arc<dyn LogSink>) {
        self.sink = Some(sink);
    }

    /// 作業 1 件を実行する。bind_sink 前の呼び出しはエラー。
    pub fn run(&self) -> Result<(), Error> {
        let sink = self.sink.as_ref().ok_or(Error::NotConfigured("sink"))?;
        sink.record(WORK_STARTED)?;
        sink.record(WORK_DONE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::NoopSink;
    use std::sync::Mutex;

    /// record されたメッセージを順に溜めるテスト用 Sink
    #[derive(Default)]
    struct RecordingSink {
        messages: Mutex<Vec<String>>,
    }

    impl LogSink for RecordingSink {
        fn record(&self, message: &str) -> Result<(), Error> {
            self.messages.lock().unwrap().push(message.to_string());
            Ok(())
        }
    }

    /// 1 件目から失敗するテスト用 Sink（失敗までの呼び出し数も数える）
    #[derive(Default)]
    struct FailingSink {
        calls: Mutex<u32>,
    }

    impl LogSink for FailingSink {
        fn record(&self, _message: &str) -> Result<(), Error> {
            *self.calls.lock().unwrap() += 1;
            Err(Error::io_msg("sink unavailable"))
        }
    }

    #[test]
    fn test_run_emits_exactly_two_records_in_order() {
        let sink = Arc::new(RecordingSink::default());
        let unit = WorkUnit::new(Arc::clone(&sink) as Arc<dyn LogSink>);

        unit.run().unwrap();

        let messages = sink.messages.lock().unwrap();
        assert_eq!(*messages, [WORK_STARTED, WORK_DONE]);
    }

    #[test]
    fn test_run_twice_appends_two_more_records() {
        let sink = Arc::new(RecordingSink::default());
        let unit = WorkUnit::new(Arc::clone(&sink) as Arc<dyn LogSink>);

        unit.run().unwrap();
        unit.run().unwrap();

        let messages = sink.messages.lock().unwrap();
        assert_eq!(
            *messages,
            [WORK_STARTED, WORK_DONE, WORK_STARTED, WORK_DONE]
        );
    }

    #[test]
    fn test_swapping_sink_keeps_call_sequence() {
        // 2 つの独立した Sink に対して同じ呼び出し列になること
        let first = Arc::new(RecordingSink::default());
        let second = Arc::new(RecordingSink::default());

        WorkUnit::new(Arc::clone(&first) as Arc<dyn LogSink>)
            .run()
            .unwrap();
        WorkUnit::new(Arc::clone(&second) as Arc<dyn LogSink>)
            .run()
            .unwrap();

        assert_eq!(
            first.messages.lock().unwrap().as_slice(),
            second.messages.lock().unwrap().as_slice()
        );
    }

    #[test]
    fn test_failed_start_marker_aborts_run() {
        let sink = Arc::new(FailingSink::default());
        let unit = WorkUnit::new(Arc::clone(&sink) as Arc<dyn LogSink>);

        let err = unit.run().unwrap_err();
        assert_eq!(err.to_string(), "sink unavailable");
        // 開始レコードで失敗したら完了レコードは試みない
        assert_eq!(*sink.calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_deferred_run_before_bind_is_reported() {
        let unit = DeferredWorkUnit::new();
        let err = unit.run().unwrap_err();
        assert!(matches!(err, Error::NotConfigured("sink")));
        assert_eq!(err.exit_code(), 70);
    }

    #[test]
    fn test_deferred_run_after_bind_matches_work_unit() {
        let sink = Arc::new(RecordingSink::default());
        let mut unit = DeferredWorkUnit::new();
        unit.bind_sink(Arc::clone(&sink) as Arc<dyn LogSink>);

        unit.run().unwrap();

        let messages = sink.messages.lock().unwrap();
        assert_eq!(*messages, [WORK_STARTED, WORK_DONE]);
    }

    #[test]
    fn test_deferred_accepts_any_sink_implementation() {
        let mut unit = DeferredWorkUnit::new();
        unit.bind_sink(Arc::new(NoopSink));
        assert!(unit.run().is_ok());
    }
}
