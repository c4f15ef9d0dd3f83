#[cfg(feature = "tracing")]
macro_rules! jtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "jumplist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! jtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! jdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "jumplist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! jdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! jwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "jumplist", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! jwarn {
    ($($tt:tt)*) => {};
}
