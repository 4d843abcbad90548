//! Test-class base for suites that need logging
//!
//! libtest has no classes, so a "test class" is a module declared with
//! [`test_class!`](crate::test_class). Before the first test of a class
//! runs, its class-level setup hook asserts that logging is initialized,
//! then runs the base's own `set_up_class`. Every test then runs the base's
//! `set_up`.

/// Hooks a test class can customise
///
/// The logging precondition is checked by the class wrapper before
/// `set_up_class` is called, so implementations never need to repeat it.
pub trait TestCaseBase {
    /// Runs once per class, before its first test
    fn set_up_class() {}

    /// Runs before every test of the class
    fn set_up() {}
}

/// Base with no extra hooks; only the logging precondition applies
pub struct LoggingTestCase;

impl TestCaseBase for LoggingTestCase {}

/// Declare a test class whose tests only run once logging is ready
///
/// # Example
///
/// ```
/// logboot::test_class!(arithmetic {
///     fn adds() {
///         log::info!("adding");
///         assert_eq!(1 + 1, 2);
///     }
/// });
/// # fn main() {}
/// ```
///
/// A custom base goes after the class name:
///
/// ```
/// use logboot::test_case::TestCaseBase;
///
/// pub struct WithFixtures;
///
/// impl TestCaseBase for WithFixtures {
///     fn set_up() {
///         log::debug!("fresh fixture");
///     }
/// }
///
/// logboot::test_class!(fixtures: WithFixtures {
///     fn uses_fixture() {}
/// });
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! test_class {
    ($class:ident { $($tests:tt)* }) => {
        $crate::test_class!($class: $crate::test_case::LoggingTestCase { $($tests)* });
    };
    ($class:ident : $base:path { $( $(#[$meta:meta])* fn $name:ident() $body:block )* }) => {
        mod $class {
            #[allow(unused_imports)]
            use super::*;

            #[allow(dead_code)]
            static SET_UP_CLASS: ::std::sync::Once = ::std::sync::Once::new();

            #[allow(dead_code)]
            fn set_up() {
                SET_UP_CLASS.call_once(|| {
                    $crate::bootstrap::assert_initialized_before_tests();
                    <$base as $crate::test_case::TestCaseBase>::set_up_class();
                });
                if let ::std::result::Result::Err(err) = $crate::bootstrap::require_initialized() {
                    panic!("{}", err);
                }
                <$base as $crate::test_case::TestCaseBase>::set_up();
            }

            $(
                $(#[$meta])*
                #[test]
                fn $name() {
                    set_up();
                    $body
                }
            )*
        }
    };
}
