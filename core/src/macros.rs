/// Return `Err($err)` unless `$cond` holds, logging the location when `err-location-log` is on.
#[macro_export]
macro_rules! try_or {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            return $crate::err!($err);
        }
    }};
}

/// Build `Err($err)`, logging the location when `err-location-log` is on.
#[macro_export]
macro_rules! err {
    ($err:expr) => {{
        let err = $err;
        if $crate::LOCATION_LOG {
            $crate::println!("\n!!! Error occurred @ {}, {}: {}", file!(), line!(), err);
        }
        Err(err)
    }};
}
