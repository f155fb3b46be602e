// Logging shims: `tracing` events under the `tracing` feature, nothing otherwise.

#[cfg(feature = "tracing")]
macro_rules! wlog {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "windowing", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wlog {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! wtrace {
    ($($tt:tt)*) => { wlog!(trace, $($tt)*) };
}

macro_rules! wdebug {
    ($($tt:tt)*) => { wlog!(debug, $($tt)*) };
}

macro_rules! wwarn {
    ($($tt:tt)*) => { wlog!(warn, $($tt)*) };
}
