/// Returns `Ok(())` when `$assert` holds, otherwise logs the message (when one
/// is given) and returns `Err($err)`.
#[macro_export]
macro_rules! validate {
    ($env:expr, $assert:expr, $err:expr) => {{
        if $assert {
            Ok(())
        } else {
            Err($err)
        }
    }};
    ($env:expr, $assert:expr, $err:expr, $($arg:tt)+) => {{
        if $assert {
            Ok(())
        } else {
            ::soroban_sdk::log!($env, $($arg)+);
            Err($err)
        }
    }};
}
