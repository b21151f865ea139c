/// A named setup step run against a shared target.
pub type Step<T> = (&'static str, fn(&T) -> anyhow::Result<()>);

/// Run every step in order. A failing step is logged and skipped; the rest
/// still run. Returns the names of the steps that failed.
pub fn install_each<T: ?Sized>(target: &T, steps: &[Step<T>]) -> Vec<&'static str> {
    let mut failed = Vec::new();
    for &(name, step) in steps {
        match step(target) {
            Ok(()) => log::debug!("[{}] installed", name),
            Err(e) => {
                log::warn!("[{}] disabled: {:?}", name, e);
                failed.push(name);
            }
        }
    }
    failed
}
