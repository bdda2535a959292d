//! 缓存层
//!
//! 通过注册表机制支持可插拔的缓存后端（Moka 内存缓存 / Redis）。
//! 后端在编译单元加载时通过 `declare_object_cache_plugin!` 宏自注册。

pub mod object_cache;
pub mod register;
mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存插件
///
/// 插件类型需要提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $plugin:ident) => {
        ::paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $plugin:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            let plugin = $plugin::new()
                                .map_err($crate::errors::SMSystemError::cache_connection)?;
                            Ok(::std::boxed::Box::new(plugin)
                                as ::std::boxed::Box<dyn $crate::cache::ObjectCache>)
                        })
                    }),
                );
            }
        }
    };
}
