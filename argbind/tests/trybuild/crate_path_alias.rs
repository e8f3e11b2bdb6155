//! Derives through a renamed dependency path.

use argbind as binding;
use binding::Bindable;

#[derive(Bindable, Default)]
#[bind(crate = "binding")]
struct Aliased {
    #[option]
    verbose: bool,
}

fn main() {
    let aliased = binding::auto_default::<Aliased>().unwrap_or_default();
    let specs = binding::specifications::<Aliased>();
    assert_eq!(specs.len(), 1);
    assert!(!aliased.verbose);
}
