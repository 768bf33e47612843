use serde_json::Value;

/// Capacidad sin argumentos que produce el valor de un campo.
///
/// Cualquier closure `Fn() -> V` con `V: Into<Value>` es un `Generator`, de
/// modo que `|| "fred"` o `|| 42` sirven directamente. Se invoca una vez por
/// build y nunca durante la compilación del blueprint.
pub trait Generator: Send + Sync {
    fn generate(&self) -> Value;
}

impl<F, V> Generator for F
    where F: Fn() -> V + Send + Sync,
          V: Into<Value>
{
    fn generate(&self) -> Value {
        (self)().into()
    }
}
