// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================
// La capa de render se suscribe y vuelve a pintar cuando cambia un store.
// Los cambios se aplican enteros (set/update) antes de notificar.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Leer el valor sin clonarlo
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        reader(&*self.value.borrow())
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    fn notify(&self) {
        // Copia de la lista: un callback puede suscribir a otro sin panic
        let callbacks: Vec<Callback> = self.subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

// Los clones comparten valor y subscribers
impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T: Default> Default for ReactiveState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
