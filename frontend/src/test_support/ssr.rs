use leptos::*;
use std::future::Future;

pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
    let runtime = create_runtime();
    let result = f();
    runtime.dispose();
    result
}

/// Like `with_runtime`, but resources created inside never start loading.
pub fn with_quiet_runtime<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    with_quiet_runtime(|| view().into_view().render_to_string().to_string())
}

/// Runs `f` inside a reactive runtime on a single-threaded tokio `LocalSet`,
/// so actions and resources can `spawn_local` their requests.
pub fn with_local_runtime_async<F, Fut, T>(f: F) -> T
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let tokio_runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(&tokio_runtime, async move {
        let runtime = create_runtime();
        let result = f().await;
        runtime.dispose();
        result
    })
}

/// Polls `condition` until it holds or roughly a second has passed.
pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    false
}
