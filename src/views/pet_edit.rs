// ============================================================================
// PET EDIT VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{
    append_child, create_element, input_value, link, on_change, on_input, on_submit, select_value, set_class_name,
    ElementBuilder,
};
use crate::models::PetStatus;
use crate::services::ApiClient;
use crate::state::{FetchState, Route};
use crate::views::pet_details::render_load_error;
use crate::views::shared::render_loader;
use crate::viewmodels::{PetEditViewModel, PetForm};

type EditViewModel = PetEditViewModel<ApiClient>;

pub fn render_pet_edit(vm: &EditViewModel) -> Result<Element, JsValue> {
    let content = match vm.state() {
        FetchState::Idle | FetchState::Loading => return render_loader("Loading pet..."),
        FetchState::Error(message) => {
            let vm = vm.clone();
            render_load_error(&message, move |_| {
                let vm = vm.clone();
                spawn_local(async move { vm.load().await });
            })?
        }
        FetchState::Success(_) => render_card(vm)?,
    };

    Ok(ElementBuilder::new("div")?
        .class("pet-edit-page")
        .child(content)?
        .build())
}

fn render_card(vm: &EditViewModel) -> Result<Element, JsValue> {
    let values = vm.form();
    let saving = vm.is_saving();

    let header = ElementBuilder::new("div")?
        .class("page-header")
        .child(ElementBuilder::new("h1")?.text("Edit Pet").build())?
        .child(ElementBuilder::new("p")?.text("Update pet information").build())?
        .build();

    let form = create_element("form")?;
    set_class_name(&form, "edit-form");

    append_child(&form, &render_name(vm, &values)?)?;
    append_child(&form, &render_status(vm, &values)?)?;
    append_child(&form, &render_category(vm, &values)?)?;

    if let Some(message) = vm.form_error() {
        let error = ElementBuilder::new("div")?.class("form-error").text(&message).build();
        append_child(&form, &error)?;
    }

    let save = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .flag("disabled", saving)?
        .text(if saving { "Saving..." } else { "Save Changes" })
        .build();
    let cancel = link(&Route::PetDetails(vm.pet_id()).to_hash(), "btn", "Cancel")?;

    let actions = ElementBuilder::new("div")?
        .class("form-actions")
        .child(save)?
        .child(cancel)?
        .build();
    append_child(&form, &actions)?;

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                let outcome = vm.submit().await;
                log::debug!("📝 [EDIT] submit finished: {:?}", outcome);
            });
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("pet-edit-card")
        .child(header)?
        .child(form)?
        .build())
}

fn form_group(id: &str, label: &str, control: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.attr("for", id)?.text(label).build())?
        .child(control)?
        .build())
}

fn text_input(id: &str, placeholder: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("input")?
        .class("form-input")
        .id(id)?
        .attr("type", "text")?
        .attr("placeholder", placeholder)?
        .attr("value", value)?
        .build())
}

fn render_name(vm: &EditViewModel, values: &PetForm) -> Result<Element, JsValue> {
    let input = text_input("pet-name", "Enter pet name", &values.name)?;
    let vm = vm.clone();
    on_input(&input, move |e| vm.set_name(&input_value(e.target())))?;
    form_group("pet-name", "Pet Name", input)
}

fn render_status(vm: &EditViewModel, values: &PetForm) -> Result<Element, JsValue> {
    let select = ElementBuilder::new("select")?.class("form-input").id("pet-status")?.build();
    if !PetStatus::ALL.contains(&values.status) {
        let placeholder = ElementBuilder::new("option")?
            .attr("value", "")?
            .flag("disabled", true)?
            .flag("selected", true)?
            .text("Select status")
            .build();
        append_child(&select, &placeholder)?;
    }
    for status in PetStatus::ALL {
        let option = ElementBuilder::new("option")?
            .attr("value", status.as_str())?
            .flag("selected", status == values.status)?
            .text(status.label())
            .build();
        append_child(&select, &option)?;
    }

    let vm = vm.clone();
    on_change(&select, move |e| match select_value(e.target()).parse::<PetStatus>() {
        Ok(status) => vm.set_status(status),
        Err(err) => log::warn!("⚠️ [EDIT] {}", err),
    })?;
    form_group("pet-status", "Status", select)
}

fn render_category(vm: &EditViewModel, values: &PetForm) -> Result<Element, JsValue> {
    let input = text_input("pet-category", "Enter category (e.g., Dogs, Cats)", &values.category)?;
    let vm = vm.clone();
    on_input(&input, move |e| vm.set_category(&input_value(e.target())))?;
    form_group("pet-category", "Category", input)
}
