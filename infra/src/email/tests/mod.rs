#[cfg(test)]
mod notifier_tests;
