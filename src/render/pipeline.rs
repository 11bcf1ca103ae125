use rayon::prelude::*;

use crate::{
    catalog::model::Catalog,
    foundation::{
        core::{Canvas, SkinImage},
        error::{TeeError, TeeResult},
    },
    render::driver::{RenderSettings, render_with},
};

#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    pub parallel: bool,
    pub threads: Option<usize>,
}

/// Render many skins with one catalog.
///
/// Results come back in input order, one per skin, so a single broken skin
/// does not hide the others. The outer error only reports a failure to set up
/// the worker pool.
#[tracing::instrument(skip(images, catalog, settings), fields(count = images.len()))]
pub fn render_batch(
    images: &[SkinImage],
    catalog: &Catalog,
    settings: &RenderSettings,
    threading: &RenderThreading,
) -> TeeResult<Vec<TeeResult<Canvas>>> {
    let results = if threading.parallel {
        let pool = worker_pool(threading.threads)?;
        pool.install(|| {
            images
                .par_iter()
                .map(|img| render_with(img, catalog, settings))
                .collect::<Vec<_>>()
        })
    } else {
        images
            .iter()
            .map(|img| render_with(img, catalog, settings))
            .collect::<Vec<_>>()
    };

    for (idx, res) in results.iter().enumerate() {
        if let Err(e) = res {
            tracing::warn!(index = idx, error = %e, "skin failed to render");
        }
    }
    Ok(results)
}

fn worker_pool(threads: Option<usize>) -> TeeResult<rayon::ThreadPool> {
    let builder = match threads {
        Some(0) => {
            return Err(TeeError::validation(
                "batch rendering needs at least one worker thread",
            ));
        }
        Some(n) => rayon::ThreadPoolBuilder::new().num_threads(n),
        None => rayon::ThreadPoolBuilder::new(),
    };
    let pool = builder
        .thread_name(|i| format!("teeforge-render-{i}"))
        .build()
        .map_err(|e| TeeError::validation(format!("render worker pool: {e}")))?;
    tracing::debug!(threads = pool.current_num_threads(), "render worker pool ready");
    Ok(pool)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
