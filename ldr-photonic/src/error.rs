//! Erros específicos do módulo fotônico

use thiserror::Error;

pub type PhotonicResult<T, E> = Result<T, PhotonicError<E>>;

/// Erro de leitura via trait [`Sensor`](ldr_core::Sensor)
///
/// Apenas embrulha a falha da plataforma; o driver não cria erros próprios.
#[derive(Debug, Error)]
pub enum PhotonicError<E: std::fmt::Debug> {
    #[error("Platform I/O failed: {0:?}")]
    Platform(E),
}

impl<E: std::fmt::Debug> PhotonicError<E> {
    /// Devolve a falha original da plataforma
    pub fn into_platform(self) -> E {
        match self {
            PhotonicError::Platform(err) => err,
        }
    }
}
