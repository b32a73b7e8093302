// src/scrape.rs
//! Fetch total scrobble counts for a tracklist's rows with a small pool of
//! worker threads. Results come back on the caller's thread; the table is
//! only touched there.

use std::{
    thread, time::Duration,
    sync::{ mpsc, Arc, atomic::{ AtomicUsize, Ordering }},
};

use crate::{
    config::consts::{ WORKERS, REQUEST_PAUSE_MS, JITTER_MS },
    progress::Progress,
    specs::scrobbles,
};

/// `(row id, count text)` for every link whose page could be read.
pub fn collect_scrobbles(
    links: &[(usize, String)],
    progress: Option<&mut dyn Progress>,
) -> Vec<(usize, String)> {
    collect_with(links, |link| scrobbles::fetch(link).map_err(|e| e.to_string()), progress)
}

/// Same as [`collect_scrobbles`] with the per-link fetch supplied.
pub fn collect_with<F>(
    links: &[(usize, String)],
    fetch: F,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<(usize, String)>
where
    F: Fn(&str) -> Result<String, String> + Send + Sync + 'static,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }
    if links.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No play counts to fetch");
            p.finish();
        }
        return Vec::new();
    }

    type FetchOk = (usize, String);
    type FetchErr = (usize, String);

    let jobs = Arc::new(links.to_vec());
    let fetch = Arc::new(fetch);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<Result<FetchOk, FetchErr>>();

    let workers = WORKERS.min(links.len()).max(1);
    logf!("Scrobbles: fetching {} links with {} workers", links.len(), workers);

    for _ in 0..workers {
        let jobs = Arc::clone(&jobs);
        let idx = Arc::clone(&counter);
        let fetch = Arc::clone(&fetch);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= jobs.len() {
                    break;
                }
                let (id, link) = &jobs[i];
                let result = match (*fetch)(link.as_str()) {
                    Ok(count) => Ok((*id, count)),
                    Err(e) => Err((*id, e)),
                };
                if tx.send(result).is_err() {
                    break;
                }
                let jitter = (*id as u64) % JITTER_MS;
                thread::sleep(Duration::from_millis(REQUEST_PAUSE_MS + jitter));
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let link_of = |id: usize| {
        jobs.iter()
            .find(|(i, _)| *i == id)
            .map(|(_, l)| l.as_str())
            .unwrap_or("?")
    };

    let mut out = Vec::with_capacity(jobs.len());
    for _ in 0..jobs.len() {
        match res_rx.recv() {
            Ok(Ok((id, count))) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id, link_of(id));
                }
                out.push((id, count));
            }
            Ok(Err((id, msg))) => {
                loge!("Scrobbles: row {id} ({}): {msg}", link_of(id));
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(id, link_of(id));
                }
            }
            Err(_) => break, // workers ended early; bail gracefully
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    out.sort_by_key(|(id, _)| *id);
    out
}
