use thiserror::Error;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("no page has room for {needed} sections and the pool is already at its {max}-page limit")]
    OutOfPages { needed: usize, max: usize },
}

pub type PoolResult<T> = Result<T, PoolError>;
