//! UseCase: 戦術分析
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - AnalyzeTacticsUseCase::execute() メソッド
//! - コメント生成の委譲と、失敗時のフォールバック
//!
//! ### なぜこのテストが必要か
//! - 外部 API が使えなくても分析結果は必ず返る必要がある
//! - 生成処理の panic は内部エラーとして扱われ、サーバーは落ちない
//!
//! ### どのような状況を想定しているか
//! - 正常系：生成されたコメントを返す
//! - 異常系：認証情報なし・タイムアウト（フォールバック）
//! - 異常系：生成処理の panic（AnalyzeError::Internal）

use std::sync::Arc;

use crate::domain::{
    CommentError, CommentGenerator, PitchSnapshot, TacticalAnalysis, TacticalReading,
};

use super::error::AnalyzeError;

/// 戦術分析のユースケース
pub struct AnalyzeTacticsUseCase {
    comment_generator: Arc<dyn CommentGenerator>,
}

impl AnalyzeTacticsUseCase {
    pub fn new(comment_generator: Arc<dyn CommentGenerator>) -> Self {
        Self { comment_generator }
    }

    /// スナップショットを読み取り、コーチのコメントを付けて返す
    ///
    /// # Returns
    ///
    /// * `Ok(TacticalAnalysis)` - 生成に失敗した場合もフォールバックのコメントで成功扱い
    /// * `Err(AnalyzeError)` - 生成タスクが異常終了した
    pub async fn execute(&self, snapshot: PitchSnapshot) -> Result<TacticalAnalysis, AnalyzeError> {
        let reading = TacticalReading::from_snapshot(&snapshot);

        let generator = self.comment_generator.clone();
        let task_reading = reading.clone();
        let generated = tokio::spawn(async move { generator.generate(&task_reading).await })
            .await
            .map_err(|e| AnalyzeError::Internal(e.to_string()))?;

        let coach_comment = match generated {
            Ok(comment) => comment,
            Err(CommentError::MissingCredential) => {
                tracing::debug!("No text-generation credential, using fallback comment");
                reading.fallback_comment()
            }
            Err(e) => {
                tracing::warn!("Coach comment unavailable, using fallback: {}", e);
                reading.fallback_comment()
            }
        };

        Ok(TacticalAnalysis {
            reading,
            red: Vec::new(),
            coach_comment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockCommentGenerator;
    use serde_json::json;

    fn snapshot() -> PitchSnapshot {
        PitchSnapshot {
            green: json!([{"x": 10, "y": 20}]),
            black: json!([{"x": 30, "y": 40}]),
            ball: json!({"x": 50, "y": 30}),
        }
    }

    #[tokio::test]
    async fn test_generated_comment_returned() {
        // テスト項目: 生成されたコメントがそのまま返る
        // given (前提条件):
        let mut generator = MockCommentGenerator::new();
        generator
            .expect_generate()
            .withf(|reading| reading.formation == "4-4-2" && reading.phase == "defesa")
            .times(1)
            .returning(|_| Ok("Fecha o meio!".to_string()));
        let usecase = AnalyzeTacticsUseCase::new(Arc::new(generator));

        // when (操作):
        let analysis = usecase.execute(snapshot()).await.unwrap();

        // then (期待する結果):
        assert_eq!(analysis.coach_comment, "Fecha o meio!");
        assert_eq!(analysis.reading.formation, "4-4-2");
        assert_eq!(analysis.reading.phase, "defesa");
        assert!(analysis.red.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential_falls_back() {
        // テスト項目: 認証情報がない場合はフォールバックのコメントになる
        // given (前提条件):
        let mut generator = MockCommentGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(CommentError::MissingCredential));
        let usecase = AnalyzeTacticsUseCase::new(Arc::new(generator));

        // when (操作):
        let analysis = usecase.execute(PitchSnapshot::default()).await.unwrap();

        // then (期待する結果):
        assert_eq!(
            analysis.coach_comment,
            "O adversário joga em 4-4-2, estamos na fase defesa."
        );
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        // テスト項目: タイムアウトでもフォールバックで成功扱いになる
        // given (前提条件):
        let mut generator = MockCommentGenerator::new();
        generator
            .expect_generate()
            .returning(|_| Err(CommentError::Timeout));
        let usecase = AnalyzeTacticsUseCase::new(Arc::new(generator));

        // when (操作):
        let result = usecase.execute(snapshot()).await;

        // then (期待する結果):
        let analysis = result.unwrap();
        assert!(analysis.coach_comment.contains("4-4-2"));
        assert!(analysis.coach_comment.contains("defesa"));
    }

    #[tokio::test]
    async fn test_generator_panic_is_internal_error() {
        // テスト項目: 生成処理の panic は AnalyzeError::Internal になる
        // given (前提条件):
        let mut generator = MockCommentGenerator::new();
        generator
            .expect_generate()
            .returning(|_| panic!("generator exploded"));
        let usecase = AnalyzeTacticsUseCase::new(Arc::new(generator));

        // when (操作):
        let result = usecase.execute(snapshot()).await;

        // then (期待する結果):
        assert!(matches!(result, Err(AnalyzeError::Internal(_))));
    }
}
