pub const MANIFEST_FILE: &str = "package.json";
pub const INSTALL_DIR: &str = "node_modules";
pub const IGNORE_FILE: &str = ".depmoleignore";
pub const REGISTRY_URL: &str = "https://registry.npmjs.org";

pub const EXTENSIONS: [&str; 8] = ["js", "jsx", "ts", "tsx", "mjs", "cjs", "mts", "cts"];

/// Build output and VCS directories the scanner always skips.
pub const SKIP_DIRS: [&str; 6] = [".git", ".next", "dist", "build", "coverage", ".turbo"];

/// Node core modules. Imports resolving to these are never npm packages.
pub const NODE_BUILTINS: [&str; 41] = [
    "assert",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "domain",
    "events",
    "fs",
    "http",
    "http2",
    "https",
    "inspector",
    "module",
    "net",
    "os",
    "path",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "repl",
    "stream",
    "string_decoder",
    "sys",
    "timers",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "v8",
    "vm",
    "worker_threads",
    "zlib",
];
