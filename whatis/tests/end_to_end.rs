use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::sync::Arc;

use whatis::cause::{Message, Wrapped};
use whatis::{
    ChainRenderer, Describe, ErrorTypes, Inspect, TypeDescriptor, UNKNOWN, describe,
    describe_error_chain, describe_error_chain_of, describe_type, describe_value,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

mod app {
    pub mod models {
        use whatis::Describe;

        #[derive(Debug, Default, Describe)]
        #[describe(namespace = "app.models")]
        pub struct Item {
            pub id: u64,
        }

        #[derive(Describe)]
        pub struct Order;

        #[derive(Describe)]
        #[describe(name = "Status")]
        pub enum OrderStatus {
            Open,
            Closed,
        }

        #[derive(Describe)]
        pub struct Page<T> {
            pub items: Vec<T>,
        }
    }
}

use app::models::{Item, Order, OrderStatus, Page};

#[derive(Debug, thiserror::Error, Describe)]
#[describe(namespace = "config")]
#[error("missing key {key}")]
struct ConfigError {
    key: String,
}

whatis::register_error_type!(ConfigError);

#[test]
fn map_of_pointers_to_named_struct() {
    init_tracing();
    let index: HashMap<String, Box<Item>> = HashMap::new();
    assert_eq!(describe(&index), "map[string]*app.models.Item");
}

#[test]
fn default_namespace_is_module_path() {
    assert_eq!(describe(&Order), "end_to_end.app.models.Order");
}

#[test]
fn renamed_enum() {
    assert_eq!(describe(&OrderStatus::Open), "end_to_end.app.models.Status");
    assert_eq!(describe(&OrderStatus::Closed), describe_type::<OrderStatus>());
}

#[test]
fn generic_struct_keeps_its_name() {
    let page = Page::<Item> { items: vec![] };
    assert_eq!(describe(&page), "end_to_end.app.models.Page");
    assert_eq!(page.items.len(), 0);
}

#[test]
fn composites_around_derived_types() {
    let item = Item::default();
    let shared = Arc::new(Item { id: item.id + 1 });

    assert_eq!(describe(&item), "app.models.Item");
    assert_eq!(describe(&shared), "*app.models.Item");
    assert_eq!(describe(&&shared), "**app.models.Item");
    assert_eq!(describe(&[Item::default(), Item::default()]), "[2]app.models.Item");
    assert_eq!(describe_type::<BTreeMap<u32, Vec<Item>>>(), "map[u32][]app.models.Item");
    assert_eq!(
        describe_type::<fn(&'static Item) -> (Order, bool)>(),
        "func (*app.models.Item) (end_to_end.app.models.Order, bool) {}"
    );
}

#[test]
fn channel_of_derived_type() {
    let (tx, rx) = std::sync::mpsc::sync_channel::<Item>(1);
    assert_eq!(describe(&tx), "chan<- app.models.Item");
    assert_eq!(describe(&rx), "<-chan app.models.Item");
}

#[test]
fn derived_descriptor_is_named_leaf() {
    assert_eq!(
        Item::type_descriptor(),
        TypeDescriptor::named("app.models", "Item")
    );
}

#[test]
fn heterogeneous_values() {
    let values: [Option<&dyn Inspect>; 3] = [Some(&42i64), None, Some(&Order)];
    let rendered: Vec<String> = values.into_iter().map(describe_value).collect();

    assert_eq!(
        rendered,
        vec![
            "i64".to_string(),
            UNKNOWN.to_string(),
            "end_to_end.app.models.Order".to_string(),
        ]
    );
}

#[test]
fn link_time_registered_error_in_chain() {
    init_tracing();
    let root = ConfigError {
        key: "database.url".to_string(),
    };
    let err = Wrapped::new(format!("starting server - {root}"), root);

    assert!(ErrorTypes::global().contains::<ConfigError>());
    assert_eq!(
        describe_error_chain(Some(&err)),
        "whatis_core.cause.Wrapped[starting server - missing key database.url]\n  \
         config.ConfigError[missing key database.url]"
    );
}

#[test]
fn boxed_dyn_error_chain() {
    let inner = Message::new("timeout");
    let boxed: Box<dyn Error + Send + Sync> =
        Box::new(Wrapped::new(format!("fetch - {inner}"), inner));

    assert_eq!(
        describe_error_chain(Some(boxed.as_ref())),
        "whatis_core.cause.Wrapped[fetch - timeout]\n  whatis_core.cause.Message[timeout]"
    );
}

#[test]
fn io_error_chain_uses_registry() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = Wrapped::new(format!("open - {io}"), io);
    let rendered = describe_error_chain(Some(&err));
    let lines: Vec<_> = rendered.lines().collect();

    assert_eq!(lines[0], "whatis_core.cause.Wrapped[open - no such file]");
    assert!(lines[1].starts_with("  std."));
    assert!(lines[1].contains(".Error[no such file]"));
}

#[test]
fn chain_with_private_registry() {
    let types = ErrorTypes::new();
    types.register::<Message>().unwrap();

    let err = Wrapped::new("outer", Message::new("inner"));
    let rendered = ChainRenderer::new()
        .registry(&types)
        .indent_unit("..")
        .render(Some(&err));

    assert_eq!(rendered, format!("{UNKNOWN}[outer]\n..whatis_core.cause.Message[inner]"));
}

#[test]
fn absent_inputs() {
    assert_eq!(describe_value(None), UNKNOWN);
    assert_eq!(describe_error_chain(None), UNKNOWN);
}

#[derive(Debug, thiserror::Error)]
#[error("shard {0} offline")]
struct ShardOffline(u8);

#[test]
fn unregistered_head_error_is_named() {
    let err = ShardOffline(3);
    assert!(!ErrorTypes::global().contains::<ShardOffline>());
    assert_eq!(
        describe_error_chain_of(Some(&err)),
        "end_to_end.ShardOffline[shard 3 offline]"
    );
}

#[test]
fn static_head_with_wrapped_causes() {
    let root = ConfigError {
        key: "port".to_string(),
    };
    let err = Wrapped::new(format!("boot - {root}"), root);

    assert_eq!(
        describe_error_chain_of(Some(&err)),
        "whatis_core.cause.Wrapped[boot - missing key port]\n  config.ConfigError[missing key port]"
    );
}
