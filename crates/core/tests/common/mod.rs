use docscope_api::{Comment, CommentTag, ReflectionKind, Symbol, SymbolFlags, SymbolId};
use docscope_core::SymbolTree;

#[allow(dead_code)]
pub fn exported() -> SymbolFlags {
    SymbolFlags {
        is_exported: true,
        ..Default::default()
    }
}

/// Inserts symbols with consecutive ids starting at 1.
pub struct TreeBuilder {
    pub tree: SymbolTree,
    next: u32,
}

#[allow(dead_code)]
impl TreeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            tree: SymbolTree::project(name),
            next: 1,
        }
    }

    pub fn root(&self) -> SymbolId {
        self.tree.root()
    }

    pub fn add(&mut self, parent: SymbolId, kind: ReflectionKind, name: &str) -> SymbolId {
        self.add_symbol(parent, |id| Symbol::new(id, kind, name))
    }

    pub fn add_with(
        &mut self,
        parent: SymbolId,
        kind: ReflectionKind,
        name: &str,
        flags: SymbolFlags,
    ) -> SymbolId {
        self.add_symbol(parent, |id| Symbol::new(id, kind, name).with_flags(flags))
    }

    pub fn add_symbol(&mut self, parent: SymbolId, make: impl FnOnce(SymbolId) -> Symbol) -> SymbolId {
        let id = SymbolId(self.next);
        self.next += 1;
        self.tree.insert(parent, make(id)).unwrap()
    }

    pub fn build(self) -> SymbolTree {
        self.tree
    }
}

/// ```text
/// demo
/// ├── core (module)                    1
/// │   ├── Foo (class)                  2   @typeparam T, @param bar.x
/// │   │   ├── T (type parameter)       3
/// │   │   ├── bar (method)             4
/// │   │   │   └── bar (call signature) 5
/// │   │   │       └── x (parameter)    6
/// │   │   ├── count (static property)  7
/// │   │   └── value (accessor)         8
/// │   │       └── value (getter)       9
/// │   ├── Options (interface)          10
/// │   │   └── debug (property)         11
/// │   └── boot (function)              12
/// │       └── boot (call signature)    13
/// └── util (module, external)          14
///     └── Level (enum)                 15
///         └── High (enum member)       16
/// ```
#[allow(dead_code)]
pub fn sample_project() -> SymbolTree {
    let mut b = TreeBuilder::new("demo");
    let root = b.root();

    let core = b.add_with(root, ReflectionKind::Module, "core", exported());
    let foo = b.add_symbol(core, |id| {
        Symbol::new(id, ReflectionKind::Class, "Foo")
            .with_flags(exported())
            .with_comment(
                Comment::new("A foo.")
                    .with_tag(CommentTag::new("typeparam", "T", "the item type"))
                    .with_tag(CommentTag::new("param", "bar.x", "desc")),
            )
    });
    b.add(foo, ReflectionKind::TypeParameter, "T");
    let bar = b.add_with(foo, ReflectionKind::Method, "bar", exported());
    let bar_sig = b.add(bar, ReflectionKind::CallSignature, "bar");
    b.add(bar_sig, ReflectionKind::Parameter, "x");
    b.add_with(
        foo,
        ReflectionKind::Property,
        "count",
        SymbolFlags {
            is_static: true,
            ..Default::default()
        },
    );
    let value = b.add(foo, ReflectionKind::Accessor, "value");
    b.add(value, ReflectionKind::GetSignature, "value");

    let options = b.add_with(core, ReflectionKind::Interface, "Options", exported());
    b.add(options, ReflectionKind::Property, "debug");
    let boot = b.add_with(core, ReflectionKind::Function, "boot", exported());
    b.add(boot, ReflectionKind::CallSignature, "boot");

    let util = b.add_with(
        root,
        ReflectionKind::Module,
        "util",
        SymbolFlags {
            is_external: true,
            ..Default::default()
        },
    );
    let level = b.add(util, ReflectionKind::Enum, "Level");
    b.add(level, ReflectionKind::EnumMember, "High");

    b.build()
}
