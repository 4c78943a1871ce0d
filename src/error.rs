use thiserror::Error;

pub type OrgChartResult<T> = Result<T, OrgChartError>;

#[derive(Debug, Error)]
pub enum OrgChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid tree: {0}")]
    InvalidTree(String),
}
