use yew::prelude::*;

use crate::pages::wheel_game::{SpinHandle, SpinView};

#[hook]
pub fn use_spin_view(engine: &SpinHandle) -> SpinView {
    let view = use_state(|| engine.view());

    {
        let view = view.clone();
        use_effect_with(engine.clone(), move |engine| {
            view.set(engine.view());
            let listener = Callback::from(move |next: SpinView| view.set(next));
            engine.subscribe(listener);

            let engine = engine.clone();
            move || engine.unsubscribe()
        });
    }

    (*view).clone()
}
