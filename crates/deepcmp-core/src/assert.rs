//! Assertion helpers for tests

/// Assert that two values compare with no diffs
///
/// Panics with the rendered diff table when leaf values differ, or with the
/// structural error when the values cannot be compared.
///
/// # Example
///
/// ```
/// use deepcmp_core::assert_no_diffs;
///
/// assert_no_diffs!(vec![1, 2, 3], vec![1, 2, 3]);
/// ```
///
/// ```should_panic
/// use deepcmp_core::assert_no_diffs;
///
/// assert_no_diffs!(vec![1, 2, 3], vec![1, 2, 4]);
/// ```
#[macro_export]
macro_rules! assert_no_diffs {
    ($expected:expr, $actual:expr $(,)?) => {
        match $crate::compare(&$expected, &$actual) {
            ::std::result::Result::Ok(diffs) => {
                if !diffs.is_empty() {
                    panic!(
                        "values differ\n\n{}",
                        $crate::compare::render_human_summary(&diffs)
                    );
                }
            }
            ::std::result::Result::Err(err) => {
                panic!("values cannot be compared: {}", err);
            }
        }
    };
}

/// Assert that comparing two values produces exactly the given diff fields
///
/// # Example
///
/// ```
/// use deepcmp_core::assert_diff_fields;
///
/// assert_diff_fields!([1, 2, 3], [1, 5, 6], ["[1]", "[2]"]);
/// ```
#[macro_export]
macro_rules! assert_diff_fields {
    ($expected:expr, $actual:expr, [$($field:expr),* $(,)?] $(,)?) => {
        match $crate::compare(&$expected, &$actual) {
            ::std::result::Result::Ok(diffs) => {
                let fields: ::std::vec::Vec<&str> = diffs.iter().map(|d| d.field.as_str()).collect();
                let wanted: ::std::vec::Vec<&str> = ::std::vec![$($field),*];
                assert_eq!(
                    fields,
                    wanted,
                    "unexpected diff fields\n\n{}",
                    $crate::compare::render_human_summary(&diffs)
                );
            }
            ::std::result::Result::Err(err) => {
                panic!("values cannot be compared: {}", err);
            }
        }
    };
}
