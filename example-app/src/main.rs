//! # 示例应用程序
//!
//! 演示如何使用容器注册服务、绑定接口以及通过构造函数自动装配对象图

use anyhow::Context;
use clap::Parser;
use di_abstractions::{DependencyError, Producer, ServiceContainer};
use di_impl::Container;
use di_macros::Injectable;
use infrastructure_common::{init_logging, ContainerConfig, LoggingConfig};
use std::any::type_name;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn DI 示例应用")]
struct Args {
    /// 容器配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 是否输出 JSON 格式日志
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = if args.json_logs {
        LoggingConfig::production()
    } else {
        LoggingConfig::default()
    };
    logging = logging.with_level(parse_log_level(&args.log_level));
    init_logging(&logging)?;

    info!("启动 Lorn DI 示例应用");

    let container = build_container(&args)?;

    demonstrate_registration(&container)?;
    demonstrate_auto_wiring(&container)?;
    demonstrate_failures(&container);

    let summary = serde_json::json!({
        "services": container.registry().registered_ids(),
        "classes": container.catalog().names(),
        "max_resolution_depth": container.config().max_resolution_depth,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    info!("应用已结束");
    Ok(())
}

/// 构建容器
fn build_container(args: &Args) -> anyhow::Result<Container> {
    info!("构建容器");

    let config = match &args.config {
        Some(path) => ContainerConfig::load_from(Some(path.as_path()), ContainerConfig::ENV_PREFIX),
        None => ContainerConfig::load(),
    }
    .context("加载容器配置失败")?;

    let container = Container::with_config(config);
    container
        .catalog()
        .add::<ConnectionPool>()
        .add::<UserRepository>()
        .add::<Mailer>()
        .add::<SignupService>()
        .add::<EmailNotifier>()
        .declare_interface::<dyn Notifier>();

    container.singleton(
        "clock",
        Producer::factory(|| SystemClock {
            started_at: std::time::SystemTime::now(),
        }),
    );
    container.register(
        type_name::<dyn Notifier>(),
        Producer::class::<EmailNotifier>(),
        false,
    );
    container.register("app.name", Producer::value("example-app"), false);

    info!("容器构建完成，登记了 {} 个类型", container.catalog().len());
    Ok(container)
}

/// 演示注册与单例
fn demonstrate_registration(container: &Container) -> anyhow::Result<()> {
    info!("演示服务注册功能");

    let name = container.get_as::<&'static str>("app.name")?;
    info!("应用名称: {}", name);

    let first = container.get_as::<SystemClock>("clock")?;
    let second = container.get_as::<SystemClock>("clock")?;
    info!(
        "单例时钟: 启动于 {:?}，两次解析为同一实例: {}",
        first.started_at,
        Arc::ptr_eq(&first, &second)
    );

    let notifier = container.get_as::<EmailNotifier>(type_name::<dyn Notifier>())?;
    notifier.notify("接口绑定解析成功");

    Ok(())
}

/// 演示自动装配
fn demonstrate_auto_wiring(container: &Container) -> anyhow::Result<()> {
    info!("演示构造函数自动装配功能");

    let signup = container.resolve::<SignupService>()?;
    let id = signup.register("alice@example.com");
    info!("注册用户成功: id={}", id);

    Ok(())
}

/// 演示错误分类
fn demonstrate_failures(container: &Container) {
    info!("演示解析错误");

    for id in ["example_app::Missing", type_name::<dyn Notifier>()] {
        let result = if container.has(id) {
            container.build(id)
        } else {
            container.get(id)
        };

        match result {
            Err(DependencyError::ClassNotFound { type_name }) => {
                info!("类型不存在: {}", type_name);
            }
            Err(DependencyError::UnresolvableAbstraction { type_name }) => {
                info!("无法实例化抽象类型: {}", type_name);
            }
            Err(e) => error!("解析失败: {}", e),
            Ok(_) => info!("解析成功: {}", id),
        }
    }
}

/// 解析日志级别
fn parse_log_level(level: &str) -> tracing::Level {
    match level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    }
}

// 示例组件

/// 系统时钟
#[derive(Debug)]
pub struct SystemClock {
    started_at: std::time::SystemTime,
}

/// 数据库连接池
#[derive(Debug, Injectable)]
pub struct ConnectionPool {
    next_id: AtomicU64,
}

/// 用户仓储
#[derive(Debug, Injectable)]
pub struct UserRepository {
    pool: Arc<ConnectionPool>,
}

impl UserRepository {
    fn insert(&self, email: &str) -> u64 {
        let id = self.pool.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        info!("写入用户: {} -> {}", email, id);
        id
    }
}

/// 邮件发送器
#[derive(Debug, Injectable)]
pub struct Mailer;

impl Mailer {
    fn send(&self, to: &str, subject: &str) {
        info!("发送邮件: to={}, subject={}", to, subject);
    }
}

/// 注册服务
#[derive(Debug, Injectable)]
pub struct SignupService {
    repository: Arc<UserRepository>,
    mailer: Arc<Mailer>,
}

impl SignupService {
    /// 注册新用户并发送欢迎邮件
    pub fn register(&self, email: &str) -> u64 {
        let id = self.repository.insert(email);
        self.mailer.send(email, "欢迎");
        id
    }
}

/// 通知接口
pub trait Notifier: Send + Sync {
    /// 发送通知
    fn notify(&self, message: &str);
}

/// 邮件通知
#[derive(Debug, Injectable)]
pub struct EmailNotifier;

impl Notifier for EmailNotifier {
    fn notify(&self, message: &str) {
        info!("邮件通知: {}", message);
    }
}
