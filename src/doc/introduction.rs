/*!
# Introductory Tutorial for Small BASIC

Small BASIC runs one program file from start to finish. Write the program
with any text editor, then hand the file name to the executable.
<pre><code>&nbsp;$ sbasic hello.bas
&nbsp;HELLO WORLD
</code></pre>

Stop a running program with CTRL-C.

A program is a sequence of lines. A line may begin with a number, its
label, which `GOTO` and `GOSUB` use to find it. Labels are matched as
written, so `010` and `10` are different labels, and every label must be
unique in the file. Lines without a label are fine too; they just can't
be jumped to.

```text
10 PRINT "HELLO WORLD"
   PRINT "NO LABEL NEEDED HERE"
20 END
```

There are 26 variables, `A` through `Z`. Each holds a number and starts
at zero. Longer names are allowed, but only the first letter counts, so
`APPLE` and `AARDVARK` are the same variable as `A`.

```text
10 COUNT = 3
20 PRINT C * 2
RUN
6
```

Expressions use `+ - * / % ^` and parentheses. Comparisons
`< <= > >= = <>` produce 1 for true and 0 for false, which is what
`IF` and `UNTIL` test.

Any error stops the program and reports the line it happened on.

```text
10 PRINT 1/0
DIVISION BY ZERO IN LINE 1
```
*/
