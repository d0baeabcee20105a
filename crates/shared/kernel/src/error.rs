use std::borrow::Cow;

/// Errors reported by a [`Viewport`](crate::motion::Viewport) implementation.
///
/// Callers treat both variants as "degrade quietly": the page never fails because an
/// animation or a scroll could not be performed.
#[derive(Debug, thiserror::Error)]
pub enum ViewportError {
    /// The environment has no observation/scroll primitive (static render, headless).
    #[error("Viewport unavailable{}: {message}", format_context(.context))]
    Unavailable { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The bridge to the rendering engine rejected a command.
    #[error("Viewport bridge error{}: {message}", format_context(.context))]
    Bridge { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ViewportError {
    pub fn unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Unavailable { message: message.into(), context: None }
    }

    pub fn bridge(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Bridge { message: message.into(), context: None }
    }
}

/// Attaches human-readable context to a viewport failure.
pub trait ViewportErrorExt<T> {
    /// # Errors
    /// Passes the original error through with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ViewportError>;
}

impl<T> ViewportErrorExt<T> for Result<T, ViewportError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                ViewportError::Unavailable { context: c, .. }
                | ViewportError::Bridge { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
