//! The [`resources!`] registration macro.
//!
//! This is the crate's stand-in for a build-time resource compiler: it turns
//! a list of `"path" => bytes` pairs into linked-in static data plus a named
//! module exposing `get_filesystem()`. Each payload is copied in const
//! evaluation into a static array with one appended zero byte — the
//! terminator guarantee consumed by the raw-pointer and C-string accessors.

/// Declare a named resource set of compile-time embedded files.
///
/// Generates a module containing a lazily built [`ResourceSet`] and a
/// `get_filesystem()` function returning its [`Filesystem`] handle. The set
/// name is fixed at compile time; there is no runtime registry.
///
/// Payload expressions must be const-evaluable `&[u8]` — byte string
/// literals or `include_bytes!`.
///
/// # Example
///
/// ```
/// embedfs::resources! {
///     /// Static assets shipped inside the binary.
///     pub mod assets {
///         "hello.txt" => b"Hello, world!",
///         "img/pixel.bin" => b"\x00\xff",
///     }
/// }
///
/// let fs = assets::get_filesystem();
/// assert_eq!(fs.read_to_string("hello.txt").unwrap(), "Hello, world!");
/// assert!(fs.is_directory("img"));
/// ```
///
/// # Panics
///
/// The first lookup panics if the registration list is malformed (duplicate
/// paths, a path used as both file and directory, or a path containing
/// `..`). Malformed input is a bug in the generating step, not a runtime
/// condition, so it is not surfaced as a [`FsError`].
///
/// [`ResourceSet`]: crate::ResourceSet
/// [`Filesystem`]: crate::Filesystem
/// [`FsError`]: crate::FsError
#[macro_export]
macro_rules! resources {
    (
        $(#[$meta:meta])*
        $vis:vis mod $name:ident {
            $($path:literal => $data:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis mod $name {
            #[allow(unused_imports)]
            use super::*;

            static SET: ::std::sync::LazyLock<$crate::ResourceSet> =
                ::std::sync::LazyLock::new(|| {
                    let builder = $crate::ResourceSet::builder(::core::stringify!($name))
                        $(
                            .file($path, {
                                const RAW: &[u8] = $data;
                                // Payload plus one trailing zero byte, copied
                                // at const-eval time into static storage.
                                static STORED: [u8; RAW.len() + 1] = {
                                    let mut buf = [0u8; RAW.len() + 1];
                                    let mut i = 0;
                                    while i < RAW.len() {
                                        buf[i] = RAW[i];
                                        i += 1;
                                    }
                                    buf
                                };
                                &STORED
                            })
                        )*;
                    match builder.build() {
                        ::core::result::Result::Ok(set) => set,
                        ::core::result::Result::Err(err) => panic!(
                            "invalid resource set `{}`: {}",
                            ::core::stringify!($name),
                            err,
                        ),
                    }
                });

            /// Virtual filesystem handle for this embedded resource set.
            pub fn get_filesystem() -> $crate::Filesystem<'static> {
                SET.filesystem()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::resources! {
        mod hello {
            "hello.txt" => b"Hello, world!",
            "a.txt" => b"alpha",
            "sub/b.txt" => b"bee",
        }
    }

    crate::resources! {
        mod empty {}
    }

    crate::resources! {
        mod broken {
            "a.txt" => b"1",
            "a.txt" => b"2",
        }
    }

    // Embeds a file from this repository so the test can compare the
    // embedded bytes against the on-disk original.
    crate::resources! {
        mod this_repo {
            "Cargo.toml" => include_bytes!("../Cargo.toml"),
        }
    }

    #[test]
    fn test_generated_filesystem() {
        let fs = hello::get_filesystem();
        assert_eq!(fs.name(), "hello");
        assert_eq!(fs.size("hello.txt").unwrap(), 13);
        assert_eq!(fs.read_to_string("hello.txt").unwrap(), "Hello, world!");

        let names: Vec<&str> = fs.read_dir("").unwrap().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a.txt", "hello.txt", "sub"]);
    }

    #[test]
    fn test_terminator_appended_by_macro() {
        let fs = hello::get_filesystem();
        let file = fs.open("hello.txt").unwrap();
        assert_eq!(file.as_bytes_with_nul(), b"Hello, world!\0");
        assert_eq!(file.as_c_str().unwrap().to_bytes(), b"Hello, world!");
    }

    #[test]
    fn test_empty_set() {
        let fs = empty::get_filesystem();
        assert_eq!(fs.read_dir("").unwrap().count(), 0);
        assert!(!fs.exists("anything"));
    }

    #[test]
    #[should_panic(expected = "duplicate embedded path")]
    fn test_malformed_set_panics_on_first_use() {
        broken::get_filesystem();
    }

    #[test]
    fn test_round_trip_matches_disk() {
        let fs = this_repo::get_filesystem();
        let embedded = fs.read("Cargo.toml").unwrap();
        let on_disk =
            std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).unwrap();
        assert_eq!(embedded, on_disk.as_slice());
        assert_eq!(fs.size("Cargo.toml").unwrap(), on_disk.len());
    }
}
