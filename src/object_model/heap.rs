//! 委譲チェーンを持つオブジェクトヒープ
//!
//! オブジェクト・関数・共有リスト・コンストラクタをアリーナに格納し、
//! コピー可能なハンドルで参照する。プロパティ参照は自身に無ければ
//! 委譲先（プロトタイプ）を順に辿り、終端まで見つからなければ
//! `Value::Undefined` を返す。

use super::function::{Constructor, ConstructorInit, NativeBody, NativeFunction};
use super::value::Value;
use crate::core::{
    ConstructorHandle, FunctionHandle, ListHandle, ObjectHandle, ObjectModelError, ObjectResult,
    ReceiverPolicy,
};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// 委譲チェーンの最大深さ（無限ループ防止）
pub const MAX_PROTOTYPE_CHAIN_DEPTH: u32 = 1024;

/// 動的レコード
#[derive(Debug, Clone, Default)]
pub struct DynObject {
    /// 委譲先。None はチェーンの終端
    pub prototype: Option<ObjectHandle>,
    /// 自身のプロパティ
    pub properties: BTreeMap<String, Value>,
}

impl DynObject {
    pub fn with_prototype(prototype: Option<ObjectHandle>) -> Self {
        Self {
            prototype,
            properties: BTreeMap::new(),
        }
    }
}

/// オブジェクトヒープ
#[derive(Debug)]
pub struct ObjectHeap {
    objects: Vec<DynObject>,
    functions: Vec<NativeFunction>,
    lists: Vec<Vec<Value>>,
    constructors: Vec<Constructor>,
    root: ObjectHandle,
    global: ObjectHandle,
    receiver_policy: ReceiverPolicy,
}

impl Default for ObjectHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectHeap {
    /// ルート委譲先とグローバルオブジェクトを持つ空のヒープを作成
    pub fn new() -> Self {
        Self::with_receiver_policy(ReceiverPolicy::default())
    }

    pub fn with_receiver_policy(receiver_policy: ReceiverPolicy) -> Self {
        let root = ObjectHandle(0);
        let global = ObjectHandle(1);
        Self {
            objects: vec![DynObject::with_prototype(None), DynObject::with_prototype(Some(root))],
            functions: Vec::new(),
            lists: Vec::new(),
            constructors: Vec::new(),
            root,
            global,
            receiver_policy,
        }
    }

    /// 全てのリテラル・コンストラクタの委譲先が最終的に到達するルート
    pub fn object_root(&self) -> ObjectHandle {
        self.root
    }

    /// ルートとグローバルを含む割り当て済みオブジェクト数
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn constructor_count(&self) -> usize {
        self.constructors.len()
    }

    // ========================================
    // オブジェクト割り当て
    // ========================================

    /// ルートに委譲するオブジェクトリテラルを作成
    pub fn alloc_object(&mut self) -> ObjectHandle {
        self.create(Some(self.root))
    }

    /// 指定した委譲先を持つオブジェクトを作成
    pub fn create(&mut self, prototype: Option<ObjectHandle>) -> ObjectHandle {
        let handle = ObjectHandle(self.objects.len() as u32);
        self.objects.push(DynObject::with_prototype(prototype));
        handle
    }

    fn object(&self, handle: ObjectHandle) -> ObjectResult<&DynObject> {
        self.objects
            .get(handle.0 as usize)
            .ok_or(ObjectModelError::ObjectNotFound(handle))
    }

    fn object_mut(&mut self, handle: ObjectHandle) -> ObjectResult<&mut DynObject> {
        self.objects
            .get_mut(handle.0 as usize)
            .ok_or(ObjectModelError::ObjectNotFound(handle))
    }

    // ========================================
    // プロパティ操作
    // ========================================

    /// 自身から委譲チェーンを辿り、最初に `visit` が Some を返した結果を返す
    fn find_in_chain<T>(
        &self,
        start: Option<ObjectHandle>,
        mut visit: impl FnMut(ObjectHandle, &DynObject) -> Option<T>,
    ) -> ObjectResult<Option<T>> {
        let mut current = start;
        let mut depth: u32 = 0;
        let mut visited = BTreeSet::new();

        while let Some(handle) = current {
            if depth > MAX_PROTOTYPE_CHAIN_DEPTH {
                return Err(ObjectModelError::PrototypeChainTooDeep {
                    depth,
                    max: MAX_PROTOTYPE_CHAIN_DEPTH,
                });
            }
            if !visited.insert(handle) {
                return Err(ObjectModelError::PrototypeCycleDetected);
            }

            let object = self.object(handle)?;
            if let Some(found) = visit(handle, object) {
                return Ok(Some(found));
            }
            current = object.prototype;
            depth += 1;
        }

        Ok(None)
    }

    /// 委譲チェーンを辿ってプロパティを取得。見つからなければ Undefined
    pub fn get(&self, handle: ObjectHandle, key: &str) -> ObjectResult<Value> {
        let found = self.find_in_chain(Some(handle), |_, object| object.properties.get(key).cloned())?;
        Ok(found.unwrap_or(Value::Undefined))
    }

    /// 自身のプロパティのみ取得
    pub fn get_own(&self, handle: ObjectHandle, key: &str) -> ObjectResult<Option<Value>> {
        Ok(self.object(handle)?.properties.get(key).cloned())
    }

    pub fn has_own(&self, handle: ObjectHandle, key: &str) -> ObjectResult<bool> {
        Ok(self.object(handle)?.properties.contains_key(key))
    }

    /// 委譲チェーン上のどこかにプロパティがあるか
    pub fn has_property(&self, handle: ObjectHandle, key: &str) -> ObjectResult<bool> {
        let found = self.find_in_chain(Some(handle), |_, object| {
            object.properties.contains_key(key).then_some(())
        })?;
        Ok(found.is_some())
    }

    /// 自身のプロパティとして設定（委譲先は変更しない）
    pub fn set(&mut self, handle: ObjectHandle, key: impl Into<String>, value: Value) -> ObjectResult<()> {
        self.object_mut(handle)?.properties.insert(key.into(), value);
        Ok(())
    }

    /// 自身のプロパティを削除。委譲先のプロパティには影響しない
    ///
    /// 削除した場合は true。
    pub fn delete(&mut self, handle: ObjectHandle, key: &str) -> ObjectResult<bool> {
        Ok(self.object_mut(handle)?.properties.remove(key).is_some())
    }

    // ========================================
    // 委譲先の操作
    // ========================================

    pub fn get_prototype_of(&self, handle: ObjectHandle) -> ObjectResult<Option<ObjectHandle>> {
        Ok(self.object(handle)?.prototype)
    }

    /// 委譲先を差し替える。循環が生じる場合はエラー
    pub fn set_prototype_of(
        &mut self,
        handle: ObjectHandle,
        prototype: Option<ObjectHandle>,
    ) -> ObjectResult<()> {
        if self.find_in_chain(prototype, |h, _| (h == handle).then_some(()))?.is_some() {
            return Err(ObjectModelError::PrototypeCycleDetected);
        }
        self.object_mut(handle)?.prototype = prototype;
        Ok(())
    }

    /// 委譲チェーン（自身を含まない）を返す
    pub fn prototype_chain(&self, handle: ObjectHandle) -> ObjectResult<Vec<ObjectHandle>> {
        let mut chain = Vec::new();
        let start = self.get_prototype_of(handle)?;
        self.find_in_chain(start, |h, _| {
            chain.push(h);
            None::<()>
        })?;
        Ok(chain)
    }

    // ========================================
    // 関数と呼び出し
    // ========================================

    pub fn alloc_function(&mut self, name: impl Into<String>, body: NativeBody) -> FunctionHandle {
        let handle = FunctionHandle(self.functions.len() as u32);
        self.functions.push(NativeFunction {
            name: name.into(),
            body,
        });
        handle
    }

    fn function(&self, handle: FunctionHandle) -> ObjectResult<&NativeFunction> {
        self.functions
            .get(handle.0 as usize)
            .ok_or(ObjectModelError::FunctionNotFound(handle))
    }

    /// 関数をレシーバ付き（または無し）で呼び出す
    pub fn call_function(
        &self,
        handle: FunctionHandle,
        receiver: Option<ObjectHandle>,
        args: &[Value],
    ) -> ObjectResult<Value> {
        let body = Rc::clone(&self.function(handle)?.body);
        body(self, receiver, args)
    }

    /// 値を関数として呼び出す。関数でなければ NotCallable
    pub fn call(
        &self,
        callee: &Value,
        receiver: Option<ObjectHandle>,
        args: &[Value],
    ) -> ObjectResult<Value> {
        match callee {
            Value::Function(handle) => self.call_function(*handle, receiver, args),
            other => Err(ObjectModelError::not_callable(other.to_string())),
        }
    }

    /// メソッド呼び出し規約 `receiver.key(args)`
    ///
    /// レシーバがレコードの場合のみ委譲チェーンを参照し、レシーバを束縛して呼び出す。
    pub fn invoke(&self, receiver: &Value, key: &str, args: &[Value]) -> ObjectResult<Value> {
        let handle = match receiver {
            Value::Object(handle) => *handle,
            other => return Err(ObjectModelError::no_such_capability(other.kind(), key)),
        };
        match self.get(handle, key)? {
            Value::Function(function) => self.call_function(function, Some(handle), args),
            _ => Err(ObjectModelError::not_callable(key)),
        }
    }

    /// 関数本体からレシーバのフィールドを読む
    ///
    /// レシーバ無しの場合、Strict ではエラー、Sloppy では空のグローバルオブジェクトを参照する。
    pub fn this_field(
        &self,
        receiver: Option<ObjectHandle>,
        key: &str,
        function: &str,
    ) -> ObjectResult<Value> {
        match (receiver, self.receiver_policy) {
            (Some(handle), _) => self.get(handle, key),
            (None, ReceiverPolicy::Strict) => Err(ObjectModelError::detached_receiver(function)),
            (None, ReceiverPolicy::Sloppy) => self.get(self.global, key),
        }
    }

    // ========================================
    // 共有リスト
    // ========================================

    pub fn alloc_list(&mut self) -> ListHandle {
        let handle = ListHandle(self.lists.len() as u32);
        self.lists.push(Vec::new());
        handle
    }

    fn list(&self, handle: ListHandle) -> ObjectResult<&Vec<Value>> {
        self.lists
            .get(handle.0 as usize)
            .ok_or(ObjectModelError::ListNotFound(handle))
    }

    pub fn list_push(&mut self, handle: ListHandle, value: Value) -> ObjectResult<usize> {
        let list = self
            .lists
            .get_mut(handle.0 as usize)
            .ok_or(ObjectModelError::ListNotFound(handle))?;
        list.push(value);
        Ok(list.len())
    }

    pub fn list_get(&self, handle: ListHandle, index: usize) -> ObjectResult<Value> {
        let list = self.list(handle)?;
        list.get(index)
            .cloned()
            .ok_or(ObjectModelError::IndexOutOfRange {
                list: handle,
                index,
                len: list.len(),
            })
    }

    pub fn list_len(&self, handle: ListHandle) -> ObjectResult<usize> {
        Ok(self.list(handle)?.len())
    }

    // ========================================
    // コンストラクタ
    // ========================================

    /// コンストラクタを登録する
    ///
    /// 新しい共有委譲先を作り、その `constructor` プロパティを自身に向ける。
    pub fn define_constructor(&mut self, name: impl Into<String>, init: ConstructorInit) -> ConstructorHandle {
        let prototype = self.alloc_object();
        let handle = ConstructorHandle(self.constructors.len() as u32);
        self.constructors.push(Constructor {
            name: name.into(),
            prototype,
            init,
        });
        self.objects[prototype.0 as usize]
            .properties
            .insert("constructor".to_string(), Value::Constructor(handle));
        handle
    }

    fn constructor(&self, handle: ConstructorHandle) -> ObjectResult<&Constructor> {
        self.constructors
            .get(handle.0 as usize)
            .ok_or(ObjectModelError::ConstructorNotFound(handle))
    }

    pub fn constructor_name(&self, handle: ConstructorHandle) -> ObjectResult<&str> {
        Ok(self.constructor(handle)?.name.as_str())
    }

    /// コンストラクタの現在の共有委譲先
    pub fn prototype_of_constructor(&self, handle: ConstructorHandle) -> ObjectResult<ObjectHandle> {
        Ok(self.constructor(handle)?.prototype)
    }

    pub fn set_constructor_prototype(
        &mut self,
        handle: ConstructorHandle,
        prototype: ObjectHandle,
    ) -> ObjectResult<()> {
        self.object(prototype)?;
        self.constructors
            .get_mut(handle.0 as usize)
            .ok_or(ObjectModelError::ConstructorNotFound(handle))?
            .prototype = prototype;
        Ok(())
    }

    /// 共有委譲先にメソッドを追加する
    pub fn define_method(
        &mut self,
        constructor: ConstructorHandle,
        name: &str,
        body: NativeBody,
    ) -> ObjectResult<FunctionHandle> {
        let prototype = self.prototype_of_constructor(constructor)?;
        let function = self.alloc_function(name, body);
        self.set(prototype, name, Value::Function(function))?;
        Ok(function)
    }

    /// 新しいインスタンスを作り、初期化処理を実行する
    pub fn construct(&mut self, handle: ConstructorHandle, args: &[Value]) -> ObjectResult<ObjectHandle> {
        let (prototype, init) = {
            let constructor = self.constructor(handle)?;
            (constructor.prototype, Rc::clone(&constructor.init))
        };
        let instance = self.create(Some(prototype));
        init(self, instance, args)?;
        Ok(instance)
    }

    /// コンストラクタの現在の共有委譲先が値の委譲チェーンに含まれるか
    pub fn instance_of(&self, value: &Value, constructor: ConstructorHandle) -> ObjectResult<bool> {
        let target = self.prototype_of_constructor(constructor)?;
        let Value::Object(handle) = value else {
            return Ok(false);
        };
        let start = self.get_prototype_of(*handle)?;
        let found = self.find_in_chain(start, |h, _| (h == target).then_some(()))?;
        Ok(found.is_some())
    }
}
