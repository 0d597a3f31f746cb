//! 容器端到端集成测试

use di_abstractions::{DependencyError, Instance, Producer, ServiceContainer};
use di_impl::{global, ClassCatalog, Container};
use di_impl_integration_tests::{
    AccountService, Chicken, CreateUserAccount, Egg, Notifier, Orm, Repository, SomeService, User,
    UserMultiParameter, Writeable, Writer,
};
use infrastructure_common::ContainerConfig;
use std::any::type_name;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// 初始化测试日志系统（只初始化一次）
fn init_test_logger() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn register_fixtures(catalog: &ClassCatalog) {
    catalog
        .add::<SomeService>()
        .add::<Orm>()
        .add::<User>()
        .add::<UserMultiParameter>()
        .add::<CreateUserAccount>()
        .add::<Writer>()
        .add::<Notifier>()
        .add::<AccountService>()
        .add::<Chicken>()
        .add::<Egg>()
        .declare_abstract::<Repository>()
        .declare_interface::<dyn Writeable>();
}

fn container() -> Container {
    init_test_logger();
    let container = Container::new();
    register_fixtures(container.catalog());
    container
}

#[test]
fn test_register_services_using_factories() {
    let container = container();
    container.register("service", Producer::factory(|| SomeService), false);

    assert!(container.has("service"));
    assert!(container.get_as::<SomeService>("service").is_ok());

    let first = container.get("service").unwrap();
    let second = container.get("service").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_register_services_using_literals() {
    let container = container();
    container.register("service", Producer::value("some string"), false);

    let value = container.get_as::<&'static str>("service").unwrap();
    assert_eq!(*value, "some string");
}

#[test]
fn test_global_instance_is_preserved() {
    let first = global::instance();
    let second = global::instance();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_global_registrations_persist() {
    global::instance().register(
        "integration.persisted",
        Producer::factory(|| SomeService),
        false,
    );

    assert!(global::instance()
        .get_as::<SomeService>("integration.persisted")
        .is_ok());
}

#[test]
fn test_unknown_service_fails_with_class_not_found() {
    let container = container();
    let result = container.get("di_impl_integration_tests::NotExistsClass");

    assert!(!container.has("di_impl_integration_tests::NotExistsClass"));
    assert!(matches!(result, Err(DependencyError::ClassNotFound { .. })));
}

#[test]
fn test_injects_dependencies() {
    let container = container();
    let user = container.resolve::<User>().unwrap();
    let _orm: &Orm = &user.orm;
}

#[test]
fn test_injects_multiple_dependencies() {
    let container = container();
    let user = container.resolve::<UserMultiParameter>().unwrap();
    let _orm: &Orm = &user.orm;
    let _service: &SomeService = &user.service;
}

#[test]
fn test_injects_nested_dependencies() {
    let container = container();
    let account = container.resolve::<CreateUserAccount>().unwrap();
    let _service: &SomeService = &account.service;
    let _orm: &Orm = &account.user.orm;
}

#[test]
fn test_auto_wiring_builds_fresh_graphs() {
    let container = container();
    let first = container.resolve::<User>().unwrap();
    let second = container.resolve::<User>().unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert!(!Arc::ptr_eq(&first.orm, &second.orm));
}

#[test]
fn test_register_singletons() {
    for key in ["service", type_name::<SomeService>()] {
        let container = container();
        container.singleton(key, Producer::factory(|| SomeService));

        let first = container.get(key).unwrap();
        let second = container.get(key).unwrap();
        assert!(Arc::ptr_eq(&first, &second), "singleton broken for {}", key);
    }
}

#[test]
fn test_singleton_factory_runs_on_every_get() {
    let container = container();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    container.singleton(
        "counted",
        Producer::factory(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Orm
        }),
    );

    let first = container.get("counted").unwrap();
    let second = container.get("counted").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_singleton_refreshes_when_produced_type_changes() {
    let container = container();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    container.singleton(
        "polymorphic",
        Producer::Factory(Arc::new(move || -> Instance {
            if counter.fetch_add(1, Ordering::SeqCst) < 2 {
                Arc::new(Orm)
            } else {
                Arc::new(SomeService)
            }
        })),
    );

    let first = container.get("polymorphic").unwrap();
    let second = container.get("polymorphic").unwrap();
    let third = container.get("polymorphic").unwrap();
    let fourth = container.get("polymorphic").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(first.downcast_ref::<Orm>().is_some());
    assert!(!Arc::ptr_eq(&second, &third));
    assert!(third.downcast_ref::<SomeService>().is_some());
    assert!(Arc::ptr_eq(&third, &fourth));
}

#[test]
fn test_class_name_producer_returns_fresh_instances() {
    let container = container();
    container.register("writer", Producer::class::<Writer>(), false);

    let first = container.get_as::<Writer>("writer").unwrap();
    let second = container.get_as::<Writer>("writer").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_binds_implementations_to_interfaces() {
    let container = container();
    container.register(type_name::<dyn Writeable>(), Producer::class::<Writer>(), false);

    let writer = container.get_as::<Writer>(type_name::<dyn Writeable>()).unwrap();
    assert_eq!(writer.write(), "written");
}

#[test]
fn test_binds_singleton_implementations_to_interfaces() {
    let container = container();
    container.singleton(type_name::<dyn Writeable>(), Producer::class::<Writer>());

    let first = container.get_as::<Writer>(type_name::<dyn Writeable>()).unwrap();
    let second = container.get_as::<Writer>(type_name::<dyn Writeable>()).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn test_instantiating_an_interface_fails() {
    let container = container();
    let result = container.get(type_name::<dyn Writeable>());
    assert!(matches!(
        result,
        Err(DependencyError::UnresolvableAbstraction { .. })
    ));
}

#[test]
fn test_instantiating_an_abstract_type_fails() {
    let container = container();
    assert!(matches!(
        container.resolve::<Repository>(),
        Err(DependencyError::UnresolvableAbstraction { .. })
    ));

    // 抽象类型作为构造参数时同样递归失败
    assert!(matches!(
        container.resolve::<AccountService>(),
        Err(DependencyError::UnresolvableAbstraction { .. })
    ));
}

#[test]
fn test_interface_parameter_receives_placeholder() {
    let container = container();
    container.register(type_name::<dyn Writeable>(), Producer::class::<Writer>(), false);

    let notifier = container.resolve::<Notifier>().unwrap();
    assert!(notifier.writer.is_none());
}

#[test]
fn test_registered_class_without_catalog_entry_fails_at_get() {
    let container = container();
    container.register("ghost", Producer::class_named("app::Ghost"), false);

    assert!(container.has("ghost"));
    assert!(matches!(
        container.get("ghost"),
        Err(DependencyError::ClassNotFound { .. })
    ));
}

#[test]
fn test_constructor_cycle_stops_at_configured_depth() {
    init_test_logger();
    let container = Container::with_config(ContainerConfig::default().with_max_resolution_depth(16));
    register_fixtures(container.catalog());

    let result = container.resolve::<Chicken>();
    assert!(matches!(
        result,
        Err(DependencyError::ResolutionDepthExceeded { depth: 16, .. })
    ));
    assert!(container.resolve::<Egg>().is_err());
}
