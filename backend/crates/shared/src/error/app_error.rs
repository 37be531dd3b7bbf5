//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::kind::ErrorKind;
use crate::validation::FieldErrors;

/// アプリケーション統一エラー型
///
/// プロジェクト全体で使用する標準エラー型です。
/// HTTP 境界ではレスポンスエンベロープ（`success: false`）として描画されます。
///
/// ## Fields
/// * `kind` - エラーの分類（HTTP ステータスコードにマッピング）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `field_errors` - フィールド単位の検証エラー（422 のみ）
/// * `source` - 元のエラー（オプション、デバッグ用）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, kind::ErrorKind};
///
/// let err = AppError::new(ErrorKind::NotFound, "Post not found");
/// assert_eq!(err.status_code(), 404);
/// ```
pub struct AppError {
    kind: ErrorKind,
    message: Cow<'static, str>,
    field_errors: Option<FieldErrors>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// アプリケーション結果型エイリアス
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: None,
            source: None,
        }
    }

    /// 400 Bad Request エラー
    #[inline]
    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// 401 Unauthorized エラー
    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// 403 Forbidden エラー
    #[inline]
    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    /// 404 Not Found エラー
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// 409 Conflict エラー
    #[inline]
    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// 422 Unprocessable Entity エラー
    #[inline]
    pub fn unprocessable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::UnprocessableEntity, message)
    }

    /// 422 検証エラー（フィールド単位のメッセージ付き）
    ///
    /// ```rust
    /// use kernel::error::app_error::AppError;
    /// use kernel::validation::FieldErrors;
    ///
    /// let mut errors = FieldErrors::new();
    /// errors.add("title", "The title field is required.");
    /// let err = AppError::validation(errors);
    /// assert_eq!(err.status_code(), 422);
    /// assert!(err.field_errors().unwrap().has("title"));
    /// ```
    #[inline]
    pub fn validation(errors: FieldErrors) -> Self {
        Self::unprocessable("The given data was invalid.").with_field_errors(errors)
    }

    /// 500 Internal Server Error
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    /// 503 Service Unavailable エラー
    #[inline]
    pub fn service_unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// フィールド単位の検証エラーを設定
    #[inline]
    pub fn with_field_errors(mut self, errors: FieldErrors) -> Self {
        self.field_errors = Some(errors);
        self
    }

    /// 元のエラーを設定（デバッグ用）
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::app_error::{AppError, AppResult};
    ///
    /// fn read_config() -> AppResult<()> {
    ///     std::fs::read_to_string("config.json")
    ///         .map_err(|e| AppError::internal("Failed to read config").with_source(e))?;
    ///     Ok(())
    /// }
    /// ```
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        self.field_errors.as_ref()
    }

    #[inline]
    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("message", &self.message);
        if let Some(errors) = &self.field_errors {
            builder.field("field_errors", errors);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::validation(errors)
    }
}
