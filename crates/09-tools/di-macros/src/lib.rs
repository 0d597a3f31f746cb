//! # DI Macros
//!
//! 为结构体生成自动装配所需的类型描述。
//!
//! 字段按声明顺序成为构造参数：
//!
//! - `Arc<T>` - 必需依赖，参数类型为 `T`
//! - `Option<Arc<T>>` - 可选依赖，无法解析时为 `None`
//! - 其他类型 - 不解析，构造时取 `Default::default()`
//!
//! `Arc<dyn Trait>` 字段无法从 `Any` 向下转型，需要手写 `Injectable` 实现。
//!
//! ```rust,ignore
//! use di_macros::Injectable;
//! use std::sync::Arc;
//!
//! #[derive(Injectable)]
//! pub struct Orm;
//!
//! #[derive(Injectable)]
//! pub struct User {
//!     pub orm: Arc<Orm>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod injectable;
mod utils;

/// 可自动装配类型派生宏
///
/// 实现 `di_abstractions::Injectable`。生成的代码引用 `::di_abstractions`，
/// 使用方需要直接依赖该 crate。
#[proc_macro_derive(Injectable)]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    injectable::derive_injectable_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
