macro_rules! make_id {
    ($(#[$meta:meta])* $vis:vis $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy,
            Clone,
            Debug,
            Hash,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            Default,
        )]
        $vis struct $name(u64);

        impl $name {
            /// Create a new identifier from its integer value.
            #[inline(always)]
            $vis const fn new(x: u64) -> Self {
                Self(x)
            }

            /// Returns the integer value of the identifier.
            #[inline(always)]
            $vis const fn value(&self) -> u64 {
                self.0
            }
        }

        impl ::std::convert::From<u64> for $name {
            #[inline(always)]
            fn from(x: u64) -> Self {
                Self(x)
            }
        }

        impl ::std::convert::From<$name> for u64 {
            #[inline(always)]
            fn from(x: $name) -> Self {
                x.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

pub(crate) use make_id;
