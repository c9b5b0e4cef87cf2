use yew::prelude::*;

use crate::gallery::visibility::use_viewport_once;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Stagger, applied as `transition-delay`.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_viewport_once(node.clone(), 0, false);

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node}
            class={classes!("reveal", visible.then(|| "visible"), props.class.clone())}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
