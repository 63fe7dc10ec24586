//! Component sources used across test modules.

pub const BUTTON: &str = r#"<script lang="ts" module>
    import type { HTMLButtonAttributes } from 'svelte/elements';

    export type Variant = 'primary' | 'secondary';

    export interface ButtonProps extends HTMLButtonAttributes {
        /** Visual style of the button. */
        variant?: Variant;
        /**
         * Show a spinner and
         * disable the button.
         */
        loading?: boolean;
        label: string;
    }
</script>

<script lang="ts">
    let {
        variant = 'primary',
        loading = false,
        label,
        ...rest
    }: ButtonProps = $props();
</script>

<button {...rest} class={variant} disabled={loading}>{label}</button>
"#;

pub const DIALOG: &str = r#"<script lang="ts">
    import type { Snippet } from 'svelte';

    type Base = {
        title: string
        onclose?: () => void
    }

    type Props = Base & {
        open?: boolean
        children?: Snippet
    }

    let { open = $bindable(false), title, onclose, children }: Props = $props();
</script>

{#if open}
    <dialog open>{title}{@render children?.()}</dialog>
{/if}
"#;

pub const UNTYPED: &str = r#"<script>
    // plain JavaScript component
    let { items = [], selected = $bindable(null), format = (item) => {
        return String(item);
    } } = $props();
</script>

<ul>{#each items as item}<li>{format(item)}</li>{/each}</ul>
"#;

pub const STATIC: &str = r#"<script>
    const year = new Date().getFullYear();
</script>

<footer>© {year}</footer>
"#;

pub const INLINE_ANNOTATION: &str = r#"<script lang="ts">
    let { href, external = false, class: className = '' }: {
        href: string;
        external?: boolean;
        class?: string;
    } & Record<`data-${string}`, string> = $props();
</script>

<a {href} class={className} target={external ? '_blank' : undefined}><slot /></a>
"#;
