use maud::{Markup, Render, html};

pub fn render_table<const N: usize>(
    overall_title: &'static str,
    titles: [&'static str; N],
    items: Vec<[Markup; N]>,
) -> Markup {
    html! {
        div class="container mx-auto" {
            (title(overall_title))
            div class="overflow-x-auto" {
                table class="min-w-full bg-gray-800 rounded shadow-md" {
                    thead class="bg-gray-700" {
                        tr {
                            @for title in titles {
                                th class="py-2 px-4 text-left font-semibold text-gray-300" {(title)}
                            }
                        }
                    }
                    tbody {
                        @if items.is_empty() {
                            tr {
                                td colspan=(N) class="py-2 px-4 italic text-gray-400" {"Nothing here yet"}
                            }
                        }
                        @for row in items {
                            tr {
                                @for col in row {
                                    td class="py-2 px-4 border-b border-gray-600 text-gray-200" {(col)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn escape(s: impl AsRef<str>) -> Markup {
    html! { (s.as_ref()) }
}

pub fn title(s: impl Render) -> Markup {
    html! {
        h1 class="text-2xl font-semibold mb-4" {(s)}
    }
}

pub fn form_element(id: &'static str, label: &'static str, input: Markup) -> Markup {
    html! {
        div class="mb-4" {
            label for=(id) class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            (input)
        }
    }
}

pub fn simple_form_element(id: &'static str, label: &'static str, required: bool) -> Markup {
    form_element(
        id,
        label,
        html! {
            input required[required] type="text" id=(id) name=(id) class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
        },
    )
}

/// A group of same-named inputs (radio buttons or checkboxes), one per option.
pub fn choice_group(
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    options: &[&'static str],
) -> Markup {
    html! {
        fieldset class="mb-4" {
            legend class="block text-sm font-bold mb-2 text-gray-300" {(label)}
            div class="flex flex-row flex-wrap gap-4" {
                @for option in options {
                    @let id = format!("{name}_{}", option.to_lowercase().replace(' ', "_"));
                    div class="flex items-center" {
                        input type=(kind) name=(name) id=(id) value=(option) class="mr-2 leading-tight" {}
                        label for=(id) class="text-gray-300 cursor-pointer" {(option)}
                    }
                }
            }
        }
    }
}

pub fn form_submit_button(text: Option<&'static str>) -> Markup {
    html! {
        div class="flex items-center justify-between" {
            button type="submit" class="bg-blue-500 hover:bg-blue-700 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline" {
                (text.unwrap_or("Submit"))
            }
        }
    }
}
