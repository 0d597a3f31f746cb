//! 宏工具函数

use syn::{GenericArgument, PathArguments, Type};

/// 构造参数的注入方式
pub enum Injection<'a> {
    /// `Arc<T>`：必需依赖
    Required(&'a Type),
    /// `Option<Arc<T>>`：可选依赖，占位符得到 `None`
    Optional(&'a Type),
    /// 其他类型：不解析，构造时取 `Default::default()`
    Untyped,
}

/// 按字段类型决定注入方式
pub fn classify(ty: &Type) -> Injection<'_> {
    if let Some(inner) = unwrap_single(ty, "Arc") {
        return Injection::Required(inner);
    }

    if let Some(inner) = unwrap_single(ty, "Option").and_then(|option| unwrap_single(option, "Arc")) {
        return Injection::Optional(inner);
    }

    Injection::Untyped
}

/// 若类型最后一段为 `wrapper<T>`，返回 `T`
fn unwrap_single<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }

    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}
