use common::export_url::default_cohort_name;
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::md_file_icons::MdCloudUpload};

/// "Save in Terra" button with its cohort name dialog.
#[component]
pub fn SaveCohortButton(has_selection: ReadSignal<bool>, on_save: Callback<String>) -> Element {
    let mut dialog_open = use_signal(|| false);
    let mut cohort_name = use_signal(String::new);
    let can_save = use_memo(move || !cohort_name.read().trim().is_empty());

    let mut save = move || {
        if !can_save() {
            return;
        }
        dialog_open.set(false);
        on_save.call(cohort_name.read().trim().to_string());
    };

    rsx! {
        button {
            class: "x-save-button",
            onclick: move |_| {
                cohort_name.set(default_cohort_name(*has_selection.read()));
                dialog_open.set(true);
            },
            Icon { icon: MdCloudUpload, style: "width: 20px; height: 20px;" }
            "Save in Terra"
        }

        if dialog_open() {
            div {
                class: "x-dialog-backdrop",
                div {
                    class: "x-dialog",
                    h2 { "Save in Terra" }
                    p { "A cohort with this name will be created in Terra." }
                    p { "If a cohort with this name already exists, it will be overwritten." }
                    input {
                        r#type: "text",
                        placeholder: "cohort name",
                        value: "{cohort_name}",
                        autofocus: true,
                        oninput: move |e: Event<FormData>| cohort_name.set(e.value()),
                        onkeydown: move |e: Event<KeyboardData>| {
                            if e.key() == Key::Enter {
                                save();
                            }
                        },
                    }
                    div {
                        class: "x-dialog-actions",
                        button {
                            onclick: move |_| dialog_open.set(false),
                            "Cancel"
                        }
                        button {
                            class: "x-primary",
                            disabled: !can_save(),
                            onclick: move |_| save(),
                            "Save"
                        }
                    }
                }
            }
        }
    }
}
