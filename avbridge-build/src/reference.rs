//! C reference builds.
//!
//! A reference is a small static library whose only job is to report what the
//! C compiler thinks: values of header macros, sizes and offsets of structs.
//! Rust tests link it and compare.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signedness {
    Signed,
    Unsigned,
}

impl Signedness {
    const fn c_type(self) -> &'static str {
        match self {
            Self::Signed => "long long",
            Self::Unsigned => "unsigned long long",
        }
    }
}

#[derive(Debug, Clone)]
struct ConstantTable {
    symbol: String,
    signedness: Signedness,
    names: Vec<String>,
}

/// Builder for a C reference library.
#[derive(Debug, Clone)]
pub struct CReference {
    lib_name: String,
    include_dirs: Vec<PathBuf>,
    headers: Vec<String>,
    files: Vec<PathBuf>,
    defines: Vec<String>,
    tables: Vec<ConstantTable>,
}

impl CReference {
    /// Start a reference compiled into `lib<lib_name>.a`.
    #[must_use]
    pub fn new(lib_name: impl Into<String>) -> Self {
        Self {
            lib_name: lib_name.into(),
            include_dirs: Vec::new(),
            headers: Vec::new(),
            files: Vec::new(),
            defines: Vec::new(),
            tables: Vec::new(),
        }
    }

    /// Add an include directory.
    #[must_use]
    pub fn include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_dirs.push(dir.into());
        self
    }

    /// `#include <header>` at the top of the generated file.
    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.headers.push(header.into());
        self
    }

    /// Compile a hand-written C file alongside the generated one.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        println!("cargo:rerun-if-changed={}", path.display());
        self.files.push(path);
        self
    }

    /// Define a preprocessor macro (`-D<name>`) for every file.
    #[must_use]
    pub fn define(mut self, name: impl Into<String>) -> Self {
        self.defines.push(name.into());
        self
    }

    /// Emit `int <symbol>(const char *name, long long *out)` answering for each macro in `names`.
    ///
    /// Macros the headers do not define report "not found" rather than failing the build.
    #[must_use]
    pub fn signed_constants(self, symbol: impl Into<String>, names: &[&str]) -> Self {
        self.table(symbol.into(), Signedness::Signed, names)
    }

    /// As [`CReference::signed_constants`], with `unsigned long long` values.
    #[must_use]
    pub fn unsigned_constants(self, symbol: impl Into<String>, names: &[&str]) -> Self {
        self.table(symbol.into(), Signedness::Unsigned, names)
    }

    fn table(mut self, symbol: String, signedness: Signedness, names: &[&str]) -> Self {
        self.tables.push(ConstantTable {
            symbol,
            signedness,
            names: names.iter().map(ToString::to_string).collect(),
        });
        self
    }

    /// The generated C source.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("/* generated by avbridge-build */\n#include <string.h>\n");
        for header in &self.headers {
            let _ = writeln!(out, "#include <{header}>");
        }

        for table in &self.tables {
            let ty = table.signedness.c_type();
            let _ = writeln!(out, "\nint {}(const char *name, {ty} *out) {{", table.symbol);
            for name in &table.names {
                let _ = writeln!(
                    out,
                    "#ifdef {name}\n    if (strcmp(name, \"{name}\") == 0) {{ *out = ({ty})({name}); return 1; }}\n#endif"
                );
            }
            out.push_str("    (void)out;\n    return 0;\n}\n");
        }
        out
    }

    /// Write the generated source to `OUT_DIR` and compile everything.
    ///
    /// # Errors
    ///
    /// Fails if `OUT_DIR` is unset, the file cannot be written, or the C compiler fails.
    pub fn compile(self) -> io::Result<()> {
        let out_dir = env::var_os("OUT_DIR")
            .map(PathBuf::from)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR not set"))?;
        self.compile_in(&out_dir)
    }

    fn compile_in(self, out_dir: &Path) -> io::Result<()> {
        let generated = out_dir.join(format!("{}.c", self.lib_name));
        fs::write(&generated, self.render())?;

        let mut build = cc::Build::new();
        build.file(&generated).files(&self.files).warnings(false);
        for dir in &self.include_dirs {
            build.include(dir);
        }
        for define in &self.defines {
            build.define(define, None);
        }
        build.try_compile(&self.lib_name).map_err(io::Error::other)
    }
}
