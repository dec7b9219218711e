//! 编译模块：将原始签名编译为可执行的正则模式
pub mod pattern;
pub mod compiler;

pub use self::pattern::{CompiledBrowserSignature, CompiledOsSignature, SignatureLibrary};
pub use self::compiler::{SignatureCompiler, BUILTIN_SIGNATURES};
