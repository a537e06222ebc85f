/// Watches a running solver and may steer it.
///
/// A solver calls [`observe`](Observer::observe) once per event. Returning
/// `Some(action)` asks for a solver-specific action; `None` continues.
///
/// Implemented for `FnMut(&E) -> Option<A>` closures and for `()`, which
/// never acts. A closure that borrows local state lets the caller inspect
/// that state once the solve returns.
pub trait Observer<E, A> {
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
