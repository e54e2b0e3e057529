/// Helper macro to build an input processor out of another.
///
/// The block is evaluated with the value parsed as the given type. Errors it
/// returns are reported as [`ErrorKind::Boxed`], spanning the consumed input.
///
/// [`ErrorKind::Boxed`]: crate::input::ErrorKind::Boxed
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// enum Dir {
///     Left,
///     Right,
/// }
///
/// lib::from_input! {
///     |W(v): W<&str>| -> Dir {
///         Ok(match v {
///             "L" => Dir::Left,
///             "R" => Dir::Right,
///             other => bail!("bad direction `{other}`"),
///         })
///     }
/// }
///
/// let mut input = Input::new(b"R L U", 0);
/// assert!(matches!(input.next::<Dir>(), Ok(Dir::Right)));
/// assert!(matches!(input.next::<Dir>(), Ok(Dir::Left)));
/// assert!(input.next::<Dir>().is_err());
/// ```
#[macro_export]
macro_rules! from_input {
    (|$($value:ident)? $(($pat:pat))?: $ty:ty| -> $($rest:tt)*) => {
        $crate::from_input!(|[$($value)? $(($pat))?]: $ty| -> $($rest)*);
    };

    (|[$($value:tt)*]: $ty:ty| -> $out:ident $block:block) => {
        impl<'a> $crate::input::FromInput<'a> for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::Input<'a>,
            ) -> core::result::Result<Option<Self>, $crate::input::InputError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput<'a>>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$($value)*: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::InputError::new(span, $crate::input::ErrorKind::Boxed(e)))
                    }
                }
            }
        }
    };
}
