use rayon::prelude::*;

/// Maps collection and collects results into vector in parallel.
pub fn parallel_into_collect<T, F, R>(source: Vec<T>, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(T) -> R + Sync + Send,
    R: Send,
{
    source.into_par_iter().map(map_op).collect()
}
